//! Error types shared across the pipeline, the ports and the adapters.

use std::time::Duration;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failures of the media-resolution pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Client input that is not an absolute http(s) URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Network failure or timeout while following a share link.
    #[error("could not resolve share URL {url}: {source}")]
    RedirectResolution {
        url: String,
        #[source]
        source: BoxError,
    },

    /// The extraction tool could not be run or exited with an error.
    /// The message carries the tool's stderr verbatim.
    #[error("{0}")]
    Extraction(String),

    /// The tool's stdout is not a single metadata object.
    #[error("failed to parse extractor JSON: {0}")]
    MetadataParse(#[from] serde_json::Error),
}

impl PipelineError {
    /// Whether the failure was caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, PipelineError::InvalidUrl(_))
    }
}

/// A pipeline failure tagged with the job it belongs to.
#[derive(Debug, Error)]
#[error("job {job_id} failed: {source}")]
pub struct JobError {
    pub job_id: String,
    #[source]
    pub source: PipelineError,
}

/// Document store failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage operation timed out after {0:?}")]
    Timeout(Duration),
}
