//! In-process document store for tests and `STORE=memory` development runs.

use crate::domain::jobs::DownloadJob;
use crate::domain::users::UserRecord;
use crate::error::StoreError;
use crate::ports::repository::{JobRepository, UserRepository};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct MemoryStore {
    jobs: Arc<RwLock<Vec<DownloadJob>>>,
    users: Arc<RwLock<HashMap<String, UserRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every job inserted so far, in insertion order.
    pub async fn jobs(&self) -> Vec<DownloadJob> {
        self.jobs.read().await.clone()
    }
}

#[async_trait]
impl JobRepository for MemoryStore {
    async fn save_job(&self, job: &DownloadJob) -> Result<(), StoreError> {
        self.jobs.write().await.push(job.clone());
        Ok(())
    }

    async fn get_job(&self, job_id: &str) -> Result<Option<DownloadJob>, StoreError> {
        let jobs = self.jobs.read().await;
        Ok(jobs.iter().rev().find(|job| job.job_id == job_id).cloned())
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create_user(&self, user: &UserRecord) -> Result<bool, StoreError> {
        let mut users = self.users.write().await;
        let key = user.email.trim().to_lowercase();
        if users.contains_key(&key) {
            return Ok(false);
        }
        users.insert(key, user.clone());
        Ok(true)
    }

    async fn find_user(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let users = self.users.read().await;
        Ok(users.get(&email.trim().to_lowercase()).cloned())
    }
}
