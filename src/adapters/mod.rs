//! Adapters - Concrete implementations of ports.

pub mod http;
pub mod memory;
pub mod redirect;
pub mod redis;
pub mod ytdlp;
