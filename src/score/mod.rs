pub mod risk;
pub mod rules;

use crate::fetch::FileEntry;
use crate::types::config::Thresholds;
use crate::types::report::{HealthReport, HealthStatus};
use chrono::Utc;

const BASE_SCORE: u32 = 100;

/// Pure scoring pass: file listing in, report out. Base score 100, a fixed
/// penalty per triggered rule, clamped to [0, 100].
pub fn analyze(repo: &str, files: &[FileEntry], thresholds: &Thresholds) -> HealthReport {
    let hits = rules::evaluate(files, thresholds);
    let penalty: u32 = hits.iter().map(|hit| u32::from(hit.penalty)).sum();
    let score = BASE_SCORE.saturating_sub(penalty) as u8;

    let file_count = files.iter().filter(|entry| entry.is_blob()).count();
    let largest_files = risk::largest_files(files, thresholds.top_files);

    HealthReport {
        repo: repo.to_string(),
        generated_at: Utc::now().to_rfc3339(),
        score,
        status: HealthStatus::from_score(score),
        file_count,
        findings: hits.into_iter().map(|hit| hit.finding).collect(),
        largest_files,
    }
}
