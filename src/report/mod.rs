pub mod json;
pub mod md;
pub mod sarif;

use crate::error::PulseError;
use crate::types::report::HealthReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
    Sarif,
}

pub fn render(report: &HealthReport, format: OutputFormat) -> Result<String, PulseError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(PulseError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
        OutputFormat::Sarif => sarif::to_sarif(report).map_err(PulseError::Json),
    }
}
