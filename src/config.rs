//! Configuration loaded from the environment.

use std::env;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Redis,
    Memory,
}

#[derive(Clone, Debug)]
pub struct Config {
    /// HTTP server bind address
    pub addr: String,
    /// HTTP server port
    pub port: String,
    /// Redis connection URL
    pub redis_url: String,
    /// Document store backend
    pub store: StoreBackend,
    /// Extraction tool executable
    pub ytdlp_bin: String,
    /// Deadline for one extraction run, none when unset
    pub extract_timeout: Option<Duration>,
    /// Timeout for following share links
    pub redirect_timeout: Duration,
    /// Timeout for a single store read or write
    pub store_timeout: Duration,
    /// JWT signing secret
    pub token_secret: Option<String>,
    /// Allowed CORS origins, any origin when empty
    pub cors_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let secs = |key: &str| {
            get(key)
                .and_then(|value| value.trim().parse::<u64>().ok())
                .map(Duration::from_secs)
        };

        Self {
            addr: get("ADDR").unwrap_or_else(|| String::from("127.0.0.1")),
            port: get("PORT").unwrap_or_else(|| String::from("9096")),
            redis_url: get("REDIS_URL").unwrap_or_else(|| String::from("redis://127.0.0.1/")),
            store: match get("STORE").as_deref().map(str::trim) {
                Some(value) if value.eq_ignore_ascii_case("memory") => StoreBackend::Memory,
                _ => StoreBackend::Redis,
            },
            ytdlp_bin: get("YTDLP_BIN").unwrap_or_else(|| String::from("yt-dlp")),
            extract_timeout: secs("EXTRACT_TIMEOUT_SECS").filter(|limit| !limit.is_zero()),
            redirect_timeout: secs("REDIRECT_TIMEOUT_SECS").unwrap_or(Duration::from_secs(30)),
            store_timeout: secs("STORE_TIMEOUT_SECS").unwrap_or(Duration::from_secs(5)),
            token_secret: get("TOKEN"),
            cors_origins: get("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(str::trim)
                        .filter(|origin| !origin.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.addr, self.port)
    }
}
