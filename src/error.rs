use thiserror::Error;

#[derive(Error, Debug)]
pub enum PulseError {
    #[error("invalid repository reference: {0}")]
    InvalidInput(String),

    #[error("repository not found: {0}")]
    NotFound(String),

    #[error("rate limited by the API (pass --token or set GITHUB_TOKEN and retry)")]
    RateLimited,

    #[error("connection failure: {0}")]
    Connection(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PulseError>;
