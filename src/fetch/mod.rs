pub mod github;
pub mod repo_ref;

pub use github::GitHubClient;
pub use repo_ref::RepoRef;

use serde::Deserialize;

/// One entry of the recursive tree listing, taken verbatim from the API.
#[derive(Debug, Clone, Deserialize)]
pub struct FileEntry {
    pub path: String,
    /// Byte size; the API omits it for trees.
    #[serde(default)]
    pub size: u64,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Blob,
    Tree,
    /// Submodule pointers and anything the API adds later.
    #[serde(other)]
    Other,
}

impl FileEntry {
    pub fn is_blob(&self) -> bool {
        self.kind == EntryKind::Blob
    }
}

#[derive(Debug, Deserialize)]
pub struct TreeResponse {
    pub tree: Vec<FileEntry>,
    #[serde(default)]
    pub truncated: bool,
}
