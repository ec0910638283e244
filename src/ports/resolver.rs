use crate::error::BoxError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RedirectResolver: Send + Sync {
    /// Follow redirects from a share link and return the final URL
    async fn resolve(&self, url: &str) -> Result<String, BoxError>;
}
