//! Redis adapter, used as the document store.
//!
//! This module provides Redis-backed implementations of:
//! - `JobRepository` for the append-only job log
//! - `UserRepository` for registered accounts
//!
//! Documents are stored as JSON strings, one key per document.

mod error;
mod pool;
mod repository;

pub use pool::RedisPool;

/// Redis key constants
const JOB_PREFIX: &str = "filta:jobs:";
const USER_PREFIX: &str = "filta:users:";
