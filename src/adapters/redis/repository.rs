//! Redis JobRepository and UserRepository implementations.

use super::pool::RedisPool;
use super::{JOB_PREFIX, USER_PREFIX};
use crate::domain::jobs::DownloadJob;
use crate::domain::users::UserRecord;
use crate::error::StoreError;
use crate::ports::repository::{JobRepository, UserRepository};
use async_trait::async_trait;
use deadpool_redis::redis::AsyncCommands;

fn job_key(job_id: &str) -> String {
    format!("{}{}", JOB_PREFIX, job_id)
}

fn user_key(email: &str) -> String {
    format!("{}{}", USER_PREFIX, email.trim().to_lowercase())
}

#[async_trait]
impl JobRepository for RedisPool {
    async fn save_job(&self, job: &DownloadJob) -> Result<(), StoreError> {
        let mut conn = self.pool.get().await?;
        let json = serde_json::to_string(job)?;
        conn.set::<_, _, ()>(job_key(&job.job_id), json).await?;
        Ok(())
    }

    async fn get_job(&self, job_id: &str) -> Result<Option<DownloadJob>, StoreError> {
        let mut conn = self.pool.get().await?;
        let json: Option<String> = conn.get(job_key(job_id)).await?;
        match json {
            Some(data) => Ok(Some(serde_json::from_str(&data)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl UserRepository for RedisPool {
    async fn create_user(&self, user: &UserRecord) -> Result<bool, StoreError> {
        let mut conn = self.pool.get().await?;
        let json = serde_json::to_string(user)?;
        // SETNX keeps the first registration for an email
        let created: bool = conn.set_nx(user_key(&user.email), json).await?;
        Ok(created)
    }

    async fn find_user(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        let mut conn = self.pool.get().await?;
        let json: Option<String> = conn.get(user_key(email)).await?;
        match json {
            Some(data) => Ok(Some(serde_json::from_str(&data)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_namespaced() {
        assert_eq!(job_key("job-1"), "filta:jobs:job-1");
        assert_eq!(user_key(" Ada@Example.com "), "filta:users:ada@example.com");
    }
}
