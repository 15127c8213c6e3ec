use crate::fetch::FileEntry;
use crate::types::report::RiskyFile;

const MIB: u64 = 1024 * 1024;
const RISK_FLOOR: u8 = 10;

/// Selects the largest blobs and annotates each with a risk estimate.
/// Path signals outrank size: a `.env` file is maximal risk no matter how
/// small it is.
pub fn largest_files(files: &[FileEntry], top: usize) -> Vec<RiskyFile> {
    let mut blobs: Vec<&FileEntry> = files.iter().filter(|entry| entry.is_blob()).collect();
    blobs.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.path.cmp(&b.path)));

    blobs
        .into_iter()
        .take(top)
        .map(|entry| {
            let percent = risk_percent(&entry.path, entry.size);
            RiskyFile {
                path: entry.path.clone(),
                size: entry.size,
                risk_percent: percent,
                risk_label: risk_label(percent).to_string(),
            }
        })
        .collect()
}

fn risk_percent(path: &str, size: u64) -> u8 {
    let lower = path.to_ascii_lowercase();
    if lower.contains(".env") {
        100
    } else if lower.contains("node_modules") {
        90
    } else if size > 5 * MIB {
        80
    } else if size > MIB {
        40
    } else {
        RISK_FLOOR
    }
}

fn risk_label(percent: u8) -> &'static str {
    match percent {
        90..=100 => "critical",
        80..=89 => "high",
        40..=79 => "elevated",
        _ => "low",
    }
}
