use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid upstream URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(reqwest::Error),
    #[error("upstream request failed: {0}")]
    Request(reqwest::Error),
    #[error("upstream responded with status {0}")]
    UpstreamStatus(u16),
    #[error("failed to read upstream body: {0}")]
    Body(reqwest::Error),
    #[error("upstream request timed out after {0:?}")]
    Timeout(Duration),
}

pub type IngestResult<T> = std::result::Result<T, IngestError>;
