use serde::Serialize;

/// One triggered rule, surfaced to the user with a suggested remedy.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub id: String,
    pub severity: Severity,
    pub title: String,
    pub explanation: String,
    pub remedy: String,
    pub urgency: String,
}

impl Finding {
    pub fn new(
        id: &str,
        severity: Severity,
        title: &str,
        explanation: impl Into<String>,
        remedy: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            severity,
            title: title.to_string(),
            explanation: explanation.into(),
            remedy: remedy.to_string(),
            urgency: severity.urgency().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }

    pub fn urgency(self) -> &'static str {
        match self {
            Severity::Info => "worth a look",
            Severity::Warning => "fix soon",
            Severity::Critical => "fix immediately",
        }
    }
}

/// Score band the overall score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Critical,
    Stable,
    Peak,
}

impl HealthStatus {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=49 => HealthStatus::Critical,
            50..=79 => HealthStatus::Stable,
            _ => HealthStatus::Peak,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HealthStatus::Critical => "critical",
            HealthStatus::Stable => "stable",
            HealthStatus::Peak => "peak",
        }
    }
}

/// One of the largest blobs in the tree, annotated with a risk estimate.
#[derive(Debug, Clone, Serialize)]
pub struct RiskyFile {
    pub path: String,
    pub size: u64,
    pub risk_percent: u8,
    pub risk_label: String,
}

/// Aggregate output of one analysis run. Lives only for the run; nothing
/// is persisted.
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub repo: String,
    pub generated_at: String,
    pub score: u8,
    pub status: HealthStatus,
    pub file_count: usize,
    pub findings: Vec<Finding>,
    pub largest_files: Vec<RiskyFile>,
}

impl HealthReport {
    pub fn has_critical(&self) -> bool {
        self.findings
            .iter()
            .any(|finding| finding.severity == Severity::Critical)
    }
}
