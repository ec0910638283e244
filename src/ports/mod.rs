//! Ports - Trait definitions the application layer depends on.

pub mod extractor;
pub mod repository;
pub mod resolver;
