//! yt-dlp adapter implementing `MediaExtractor`.

pub mod cmd;

use crate::domain::policy;
use crate::error::PipelineError;
use crate::ports::extractor::MediaExtractor;
use async_trait::async_trait;
use cmd::{ExtractorRunner, RealExtractorRunner};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

pub const DEFAULT_PROGRAM: &str = "yt-dlp";

pub struct YtDlpExtractor<R = RealExtractorRunner> {
    runner: R,
    program: String,
    timeout: Option<Duration>,
}

impl YtDlpExtractor {
    pub fn new(program: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self::with_runner(RealExtractorRunner, program, timeout)
    }
}

impl<R: ExtractorRunner> YtDlpExtractor<R> {
    pub fn with_runner(runner: R, program: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            runner,
            program: program.into(),
            timeout,
        }
    }
}

#[async_trait]
impl<R: ExtractorRunner> MediaExtractor for YtDlpExtractor<R> {
    async fn extract(&self, url: &Url, max_height: Option<u32>) -> Result<Vec<u8>, PipelineError> {
        let host = url.host_str().unwrap_or_default();
        let policy = policy::select(host);
        let args = policy.args(url.as_str(), max_height);
        debug!(program = %self.program, policy = policy.name, ?args, "invoking extractor");

        let run = self.runner.run_extractor(&self.program, &args);
        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, run).await.map_err(|_| {
                PipelineError::Extraction(format!("{} timed out after {:?}", self.program, limit))
            })?,
            None => run.await,
        }
        .map_err(|e| PipelineError::Extraction(format!("could not start {}: {}", self.program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!(program = %self.program, status = %output.status, "extractor failed");
            return Err(PipelineError::Extraction(format!(
                "{} failed: {}\nDetails: {}",
                self.program,
                output.status,
                stderr.trim_end()
            )));
        }

        Ok(output.stdout)
    }
}
