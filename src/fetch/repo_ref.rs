use crate::error::{PulseError, Result};
use std::fmt;

/// A validated `owner/repo` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

impl RepoRef {
    /// Parses user input such as `owner/repo`, `github.com/owner/repo` or a
    /// full `https://github.com/owner/repo/` URL. Scheme, host and trailing
    /// path segments are stripped; anything with fewer than two segments
    /// left is rejected.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let without_scheme = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .unwrap_or(trimmed);

        let mut segments: Vec<&str> = without_scheme
            .split('/')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .collect();

        // A leading hostname only counts as such when owner/repo still remain.
        if segments.len() > 2 && segments[0].contains('.') {
            segments.remove(0);
        }

        if segments.len() < 2 {
            return Err(PulseError::InvalidInput(format!(
                "expected owner/repo, got {input:?}"
            )));
        }

        let owner = segments[0].to_string();
        let repo = segments[1]
            .strip_suffix(".git")
            .unwrap_or(segments[1])
            .to_string();
        Ok(Self { owner, repo })
    }
}
