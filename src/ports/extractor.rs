use crate::error::PipelineError;
use async_trait::async_trait;
use url::Url;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaExtractor: Send + Sync {
    /// Run the extraction tool against a normalized URL and return its raw stdout.
    /// max_height: optional cap applied to the format selector
    async fn extract(&self, url: &Url, max_height: Option<u32>) -> Result<Vec<u8>, PipelineError>;
}
