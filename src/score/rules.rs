use crate::fetch::FileEntry;
use crate::types::config::Thresholds;
use crate::types::report::{Finding, Severity};

/// One triggered rule together with its score penalty.
#[derive(Debug, Clone)]
pub struct RuleHit {
    pub finding: Finding,
    pub penalty: u8,
}

const LOCKFILE_NAMES: [&str; 5] = [
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "bun.lockb",
    "npm-shrinkwrap.json",
];

/// Runs the fixed rule sequence over the blob paths. Rules are independent;
/// none reads another's outcome.
pub fn evaluate(files: &[FileEntry], thresholds: &Thresholds) -> Vec<RuleHit> {
    let paths: Vec<String> = files
        .iter()
        .filter(|entry| entry.is_blob())
        .map(|entry| entry.path.to_ascii_lowercase())
        .collect();
    let file_count = paths.len();

    let mut hits = Vec::new();

    if file_count > thresholds.bloat_files {
        hits.push(RuleHit {
            finding: Finding::new(
                "repo.bloat",
                Severity::Warning,
                "Massive complexity",
                format!(
                    "The repository holds {file_count} files, above the {} threshold.",
                    thresholds.bloat_files
                ),
                "Split the repository or prune generated and vendored content.",
            ),
            penalty: 20,
        });
    }

    if file_count < thresholds.sparse_files {
        hits.push(RuleHit {
            finding: Finding::new(
                "repo.sparse",
                Severity::Info,
                "Sparse repository",
                format!(
                    "Only {file_count} files were found, below the {} threshold.",
                    thresholds.sparse_files
                ),
                "Commit the actual sources, or archive the repository if it is abandoned.",
            ),
            penalty: 10,
        });
    }

    if paths.iter().any(|path| path.contains("node_modules/")) {
        hits.push(RuleHit {
            finding: Finding::new(
                "hygiene.node_modules",
                Severity::Critical,
                "Forbidden commit",
                "node_modules/ is committed to the repository.",
                "Remove node_modules/ from history and add it to .gitignore.",
            ),
            penalty: 30,
        });
    }

    if !paths.iter().any(|path| path == "readme.md") {
        hits.push(RuleHit {
            finding: Finding::new(
                "docs.missing_readme",
                Severity::Critical,
                "Missing documentation",
                "No README.md exists at the repository root.",
                "Add a README.md describing what the project does and how to run it.",
            ),
            penalty: 25,
        });
    }

    if paths.iter().any(|path| {
        path.contains(".env") && !path.contains("example") && !path.contains("sample")
    }) {
        hits.push(RuleHit {
            finding: Finding::new(
                "secrets.env_file",
                Severity::Critical,
                "Secret leak",
                "A .env file is committed; credentials in it must be treated as exposed.",
                "Rotate the exposed credentials, delete the file from history, and commit \
                 a .env.example instead.",
            ),
            penalty: 40,
        });
    }

    let has_manifest = paths.iter().any(|path| file_name(path) == "package.json");
    let has_lockfile = paths
        .iter()
        .any(|path| LOCKFILE_NAMES.contains(&file_name(path)));
    if has_manifest && !has_lockfile {
        hits.push(RuleHit {
            finding: Finding::new(
                "deps.no_lockfile",
                Severity::Warning,
                "Unstable dependencies",
                "package.json is present but no lockfile variant accompanies it.",
                "Commit the lockfile produced by your package manager.",
            ),
            penalty: 10,
        });
    }

    let has_tests = paths
        .iter()
        .any(|path| path.contains("test") || path.contains("spec"));
    if !has_tests && file_count > 20 {
        hits.push(RuleHit {
            finding: Finding::new(
                "tests.missing",
                Severity::Info,
                "No tests",
                "No test-indicating path exists in a repository of this size.",
                "Add an automated test suite, starting with the core logic.",
            ),
            penalty: 5,
        });
    }

    let has_typescript = paths
        .iter()
        .any(|path| path.ends_with(".ts") || path.ends_with(".tsx"));
    if !has_typescript && file_count > 30 {
        hits.push(RuleHit {
            finding: Finding::new(
                "types.untyped",
                Severity::Info,
                "Type safety gap",
                "No TypeScript sources exist in a repository of this size.",
                "Consider adopting TypeScript for new modules.",
            ),
            penalty: 5,
        });
    }

    hits
}

fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
