//! HTTP inbound adapter.
//!
//! Routes:
//! - `GET /`                  welcome message
//! - `POST /analyse`          resolve a media URL and record the job
//! - `GET /status/:job_id`    look up a recorded job
//! - `POST /register`, `POST /login`

mod error;
mod handlers;

pub use error::ApiError;

use crate::application::accounts::AccountService;
use crate::application::orchestrator::ResolveService;
use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<ResolveService>,
    pub accounts: Arc<AccountService>,
}

/// Listed origins with credentials, or any origin when the list is empty.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if origins.is_empty() {
        // credentials cannot be combined with a wildcard origin
        return layer.allow_origin(AllowOrigin::any());
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer
        .allow_origin(AllowOrigin::list(parsed))
        .allow_credentials(true)
}

pub fn router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/analyse", post(handlers::analyse))
        .route("/status/:job_id", get(handlers::status))
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
