//! Redis connection pool.

use crate::error::StoreError;
use deadpool_redis::{Config, Pool, Runtime};

/// Redis-backed adapter for the job and user repositories.
#[derive(Clone)]
pub struct RedisPool {
    pub(super) pool: Pool,
}

impl RedisPool {
    /// Create a new RedisPool with connection pool.
    /// Connections are opened lazily on first use.
    pub fn new(redis_url: &str) -> Result<Self, StoreError> {
        let cfg = Config::from_url(redis_url);
        let pool = cfg.create_pool(Some(Runtime::Tokio1))?;
        Ok(Self { pool })
    }
}
