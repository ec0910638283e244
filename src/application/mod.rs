//! Application layer - Services that use ports.

pub mod accounts;
pub mod orchestrator;
