use crate::domain::jobs::DownloadJob;
use crate::domain::users::UserRecord;
use crate::error::StoreError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Insert a job document (no uniqueness check on job_id)
    async fn save_job(&self, job: &DownloadJob) -> Result<(), StoreError>;

    /// Look up a job by id
    async fn get_job(&self, job_id: &str) -> Result<Option<DownloadJob>, StoreError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user keyed by email
    /// Returns false if the email is already registered
    async fn create_user(&self, user: &UserRecord) -> Result<bool, StoreError>;

    /// Find a user by email
    async fn find_user(&self, email: &str) -> Result<Option<UserRecord>, StoreError>;
}
