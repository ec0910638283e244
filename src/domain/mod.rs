//! Domain layer - Pure business logic.

pub mod format;
pub mod jobs;
pub mod metadata;
pub mod policy;
pub mod url;
pub mod users;
