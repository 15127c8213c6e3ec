use crate::types::report::{HealthReport, Severity};
use serde_json::json;

pub fn to_sarif(report: &HealthReport) -> Result<String, serde_json::Error> {
    let results: Vec<_> = report
        .findings
        .iter()
        .map(|finding| {
            json!({
                "ruleId": finding.id,
                "level": match finding.severity {
                    Severity::Critical => "error",
                    Severity::Warning => "warning",
                    Severity::Info => "note",
                },
                "message": { "text": format!("{} {}", finding.explanation, finding.remedy) },
            })
        })
        .collect();

    let sarif = json!({
        "version": "2.1.0",
        "runs": [{
            "tool": {
                "driver": {
                    "name": "repopulse",
                    "version": env!("CARGO_PKG_VERSION")
                }
            },
            "results": results
        }]
    });

    serde_json::to_string_pretty(&sarif)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::report::{Finding, HealthStatus};

    #[test]
    fn sarif_maps_severities_to_levels() {
        let report = HealthReport {
            repo: "octo/demo".to_string(),
            generated_at: "2026-01-01T00:00:00Z".to_string(),
            score: 25,
            status: HealthStatus::Critical,
            file_count: 3,
            findings: vec![
                Finding::new("a", Severity::Critical, "A", "a.", "fix a"),
                Finding::new("b", Severity::Warning, "B", "b.", "fix b"),
                Finding::new("c", Severity::Info, "C", "c.", "fix c"),
            ],
            largest_files: vec![],
        };

        let rendered = to_sarif(&report).expect("sarif should serialize");
        assert!(rendered.contains("\"version\": \"2.1.0\""));
        assert!(rendered.contains("\"level\": \"error\""));
        assert!(rendered.contains("\"level\": \"warning\""));
        assert!(rendered.contains("\"level\": \"note\""));
    }
}
