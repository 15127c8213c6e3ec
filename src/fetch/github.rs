use super::repo_ref::RepoRef;
use super::{FileEntry, TreeResponse};
use crate::error::{PulseError, Result};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
pub struct RepoMetadata {
    pub default_branch: String,
}

/// Thin client over the repository-hosting REST API. Sync HTTP via ureq;
/// holds no state across analyses beyond the connection agent.
pub struct GitHubClient {
    agent: ureq::Agent,
    api_base: String,
    token: Option<String>,
}

fn make_agent() -> ureq::Agent {
    ureq::config::Config::builder()
        .http_status_as_error(false) // status codes are mapped by hand below
        .timeout_global(Some(Duration::from_secs(30)))
        .build()
        .new_agent()
}

impl GitHubClient {
    pub fn new(api_base: impl Into<String>, token: Option<String>) -> Self {
        let api_base = api_base.into();
        Self {
            agent: make_agent(),
            api_base: api_base.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Fetches the flat recursive file listing for a repository. Two
    /// sequential calls: metadata first (for the default branch), then the
    /// recursive tree for that branch.
    pub fn fetch_listing(&self, repo: &RepoRef) -> Result<Vec<FileEntry>> {
        let metadata = self.repo_metadata(repo)?;
        debug!(
            repo = %repo,
            branch = %metadata.default_branch,
            "resolved default branch"
        );
        let tree = self.repo_tree(repo, &metadata.default_branch)?;
        if tree.truncated {
            warn!(repo = %repo, "file listing truncated by the API; score is approximate");
        }
        Ok(tree.tree)
    }

    pub fn repo_metadata(&self, repo: &RepoRef) -> Result<RepoMetadata> {
        let url = format!("{}/repos/{}/{}", self.api_base, repo.owner, repo.repo);
        self.get_json(&url, repo)
    }

    pub fn repo_tree(&self, repo: &RepoRef, branch: &str) -> Result<TreeResponse> {
        let url = format!(
            "{}/repos/{}/{}/git/trees/{}?recursive=1",
            self.api_base, repo.owner, repo.repo, branch
        );
        self.get_json(&url, repo)
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str, repo: &RepoRef) -> Result<T> {
        debug!(url, "GET");
        let mut request = self
            .agent
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .header("User-Agent", concat!("repopulse/", env!("CARGO_PKG_VERSION")));
        if let Some(token) = &self.token {
            request = request.header("Authorization", &format!("Bearer {token}"));
        }

        let response = request
            .call()
            .map_err(|e| PulseError::Connection(e.to_string()))?;

        let status = response.status().as_u16();
        debug!(url, status, "response");
        if !(200..300).contains(&status) {
            return Err(status_error(status, repo));
        }

        response
            .into_body()
            .read_json::<T>()
            .map_err(|e| PulseError::Connection(format!("malformed API response: {e}")))
    }
}

/// Maps a non-success HTTP status to the error surfaced to the caller.
/// 403 is kept distinct so callers can prompt for a token and retry.
fn status_error(status: u16, repo: &RepoRef) -> PulseError {
    match status {
        404 => PulseError::NotFound(repo.to_string()),
        403 => PulseError::RateLimited,
        _ => PulseError::Connection(format!("API returned status {status}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_repo() -> RepoRef {
        RepoRef {
            owner: "octo".to_string(),
            repo: "demo".to_string(),
        }
    }

    #[test]
    fn status_404_maps_to_not_found() {
        assert!(matches!(
            status_error(404, &sample_repo()),
            PulseError::NotFound(_)
        ));
    }

    #[test]
    fn status_403_maps_to_rate_limited_not_connection() {
        assert!(matches!(
            status_error(403, &sample_repo()),
            PulseError::RateLimited
        ));
    }

    #[test]
    fn other_statuses_map_to_connection_failure() {
        for status in [400, 401, 500, 502] {
            assert!(matches!(
                status_error(status, &sample_repo()),
                PulseError::Connection(_)
            ));
        }
    }

    #[test]
    fn metadata_parses_default_branch() {
        let metadata: RepoMetadata =
            serde_json::from_str(r#"{"name": "demo", "default_branch": "trunk"}"#)
                .expect("metadata should parse");
        assert_eq!(metadata.default_branch, "trunk");
    }

    #[test]
    fn client_trims_trailing_slash_from_base() {
        let client = GitHubClient::new("https://api.github.com/", None);
        assert_eq!(client.api_base, "https://api.github.com");
    }
}
