//! Server binary - wires adapters into the HTTP layer.
//!
//! It wires up:
//! - Document store (Redis, or in-memory with `STORE=memory`)
//! - yt-dlp extractor and the share-link resolver
//! - Application services behind the axum router

use filta::adapters::http::{cors_layer, router, AppState};
use filta::adapters::memory::MemoryStore;
use filta::adapters::redirect::HttpRedirectResolver;
use filta::adapters::redis::RedisPool;
use filta::adapters::ytdlp::YtDlpExtractor;
use filta::application::accounts::{AccountService, MIN_SECRET_LEN};
use filta::config::{Config, StoreBackend};
use filta::ports::repository::{JobRepository, UserRepository};
use filta::ResolveService;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("filta=info,tower_http=info")),
        )
        .init();

    // 1. Adapters
    let (jobs, users): (Arc<dyn JobRepository>, Arc<dyn UserRepository>) = match config.store {
        StoreBackend::Redis => match RedisPool::new(&config.redis_url) {
            Ok(pool) => (Arc::new(pool.clone()), Arc::new(pool)),
            Err(e) => {
                error!(error = %e, "failed to create Redis pool");
                std::process::exit(1);
            }
        },
        StoreBackend::Memory => {
            warn!("using in-memory store; jobs are lost on restart");
            let store = MemoryStore::new();
            (Arc::new(store.clone()), Arc::new(store))
        }
    };

    let resolver = match HttpRedirectResolver::new(config.redirect_timeout) {
        Ok(resolver) => resolver,
        Err(e) => {
            error!(error = %e, "failed to build HTTP client");
            std::process::exit(1);
        }
    };
    let extractor = YtDlpExtractor::new(config.ytdlp_bin.clone(), config.extract_timeout);

    if config
        .token_secret
        .as_ref()
        .map_or(true, |secret| secret.len() < MIN_SECRET_LEN)
    {
        warn!("TOKEN is missing or shorter than {MIN_SECRET_LEN} characters; login is disabled");
    }

    // 2. Application Services
    let state = AppState {
        resolver: Arc::new(
            ResolveService::new(Arc::new(extractor), Arc::new(resolver), jobs)
                .with_store_timeout(config.store_timeout),
        ),
        accounts: Arc::new(AccountService::new(users, config.token_secret.clone())),
    };

    // 3. HTTP Layer
    let app = router(state, cors_layer(&config.cors_origins));

    // 4. Start Server
    let listener = match tokio::net::TcpListener::bind(config.bind_addr()).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr(), error = %e, "failed to bind TCP listener");
            std::process::exit(1);
        }
    };
    info!(addr = %config.bind_addr(), "listening");
    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server error");
        std::process::exit(1);
    }
}
