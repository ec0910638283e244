use super::metadata::VideoMetadata;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

pub const READY_MESSAGE: &str = "Video link is ready";

#[derive(Debug, Clone, Deserialize)]
pub struct DownloadRequest {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub quality: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Success,
    Failed,
}

/// Persisted outcome of one resolution request. Never updated after insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadJob {
    pub job_id: String,
    /// URL as submitted by the client
    pub url: String,
    pub direct_link: String,
    pub status: JobStatus,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub webpage_url: String,
    pub extension: String,
    pub format_id: String,
    pub filesize: String,
    pub duration: String,
    pub created_at: DateTime<Utc>,
}

impl DownloadJob {
    pub fn succeeded(
        job_id: String,
        source_url: &str,
        meta: &VideoMetadata,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            job_id,
            url: source_url.to_string(),
            direct_link: meta.direct_url().to_string(),
            status: JobStatus::Success,
            title: meta.title.clone(),
            description: meta.description.clone(),
            thumbnail: meta.thumbnail.clone(),
            webpage_url: meta.webpage_url.clone(),
            extension: meta.ext.clone(),
            format_id: meta.format_id.clone(),
            filesize: meta.human_size(),
            duration: meta.human_duration(),
            created_at,
        }
    }
}

/// Body returned by `POST /analyse`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyseResponse {
    pub job_id: String,
    pub direct_link: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub webpage_url: String,
    pub extension: String,
    pub format_id: String,
    pub filesize: String,
    pub duration: String,
    pub message: String,
}

impl AnalyseResponse {
    pub fn new(job_id: String, meta: &VideoMetadata) -> Self {
        Self {
            job_id,
            direct_link: meta.direct_url().to_string(),
            title: meta.title.clone(),
            description: meta.description.clone(),
            thumbnail: meta.thumbnail.clone(),
            webpage_url: meta.webpage_url.clone(),
            extension: meta.ext.clone(),
            format_id: meta.format_id.clone(),
            filesize: meta.human_size(),
            duration: meta.human_duration(),
            message: READY_MESSAGE.to_string(),
        }
    }
}

/// Issues `job-<nanos>` identifiers that are strictly increasing within the
/// process, even when the wall clock stalls or steps backwards.
#[derive(Debug, Default)]
pub struct JobIdGenerator {
    last: AtomicU64,
}

impl JobIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or(0);
        let next = |prev: u64| now.max(prev + 1);
        // fetch_update returns the previous value; the closure never fails
        let prev = self
            .last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |prev| Some(next(prev)))
            .unwrap_or_else(|prev| prev);
        format!("job-{}", next(prev))
    }
}
