use crate::domain::jobs::{AnalyseResponse, DownloadJob, DownloadRequest, JobIdGenerator};
use crate::domain::metadata::VideoMetadata;
use crate::domain::policy::parse_height;
use crate::domain::url::normalize;
use crate::error::{JobError, PipelineError, StoreError};
use crate::ports::extractor::MediaExtractor;
use crate::ports::repository::JobRepository;
use crate::ports::resolver::RedirectResolver;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Runs one resolution request end to end and records its outcome.
pub struct ResolveService {
    extractor: Arc<dyn MediaExtractor>,
    resolver: Arc<dyn RedirectResolver>,
    jobs: Arc<dyn JobRepository>,
    ids: JobIdGenerator,
    store_timeout: Duration,
}

impl ResolveService {
    pub fn new(
        extractor: Arc<dyn MediaExtractor>,
        resolver: Arc<dyn RedirectResolver>,
        jobs: Arc<dyn JobRepository>,
    ) -> Self {
        Self {
            extractor,
            resolver,
            jobs,
            ids: JobIdGenerator::new(),
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    pub fn with_store_timeout(mut self, store_timeout: Duration) -> Self {
        self.store_timeout = store_timeout;
        self
    }

    pub async fn resolve_and_record(
        &self,
        request: &DownloadRequest,
    ) -> Result<AnalyseResponse, JobError> {
        // 1. Job id first, so every log line can be correlated
        let job_id = self.ids.next_id();
        info!(job_id = %job_id, url = %request.url, "starting fetch");

        // 2. Normalize, extract, parse
        let metadata = match self.resolve(request).await {
            Ok(metadata) => metadata,
            Err(source) => {
                warn!(job_id = %job_id, error = %source, "job failed");
                return Err(JobError { job_id, source });
            }
        };

        // 3. Build the record
        let job = DownloadJob::succeeded(job_id.clone(), &request.url, &metadata, Utc::now());

        // 4. Persist, best effort
        self.persist(&job).await;

        // 5. Respond
        info!(job_id = %job_id, title = %metadata.title, "job completed");
        Ok(AnalyseResponse::new(job_id, &metadata))
    }

    async fn resolve(&self, request: &DownloadRequest) -> Result<VideoMetadata, PipelineError> {
        let url = normalize(&request.url, self.resolver.as_ref()).await?;
        let max_height = request.quality.as_deref().and_then(parse_height);
        let raw = self.extractor.extract(&url, max_height).await?;
        VideoMetadata::from_json(&raw)
    }

    async fn persist(&self, job: &DownloadJob) {
        let outcome = tokio::time::timeout(self.store_timeout, self.jobs.save_job(job))
            .await
            .unwrap_or(Err(StoreError::Timeout(self.store_timeout)));
        if let Err(e) = outcome {
            error!(job_id = %job.job_id, error = %e, "failed to insert job");
        }
    }

    pub async fn job_status(&self, job_id: &str) -> Result<Option<DownloadJob>, StoreError> {
        tokio::time::timeout(self.store_timeout, self.jobs.get_job(job_id))
            .await
            .unwrap_or(Err(StoreError::Timeout(self.store_timeout)))
    }
}
