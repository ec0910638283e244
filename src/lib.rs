//! Filta - media link resolution service
//!
//! Hexagonal Architecture:
//! - domain/: Pure business logic (URL normalization, extraction policy, metadata, jobs, users)
//! - ports/: Trait definitions (extractor, redirect resolver, repositories)
//! - adapters/: Concrete implementations (yt-dlp, reqwest, Redis, in-memory, HTTP)
//! - application/: Services that use ports
//! - config: Environment configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;

// Re-exports for convenience
pub use application::orchestrator::ResolveService;
pub use config::Config;
pub use error::{JobError, PipelineError, StoreError};
