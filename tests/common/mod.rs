//! Shared fixtures for the HTTP integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use filta::adapters::http::{cors_layer, router, AppState};
use filta::adapters::memory::MemoryStore;
use filta::application::accounts::AccountService;
use filta::error::{BoxError, PipelineError};
use filta::ports::extractor::MediaExtractor;
use filta::ports::resolver::RedirectResolver;
use filta::ResolveService;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use url::Url;

pub const SECRET: &str = "integration-secret-0123456789abcdef";

pub const STUB_METADATA: &str = r#"{
    "title": "Sample clip",
    "description": "A short clip",
    "thumbnail": "https://cdn.example/thumb.jpg",
    "webpage_url": "https://www.youtube.com/watch?v=abc",
    "format_id": "22",
    "ext": "mp4",
    "filesize": 5242880,
    "duration": 65.4,
    "url": "https://cdn.example/clip.mp4"
}"#;

/// Extractor returning a fixed outcome and counting invocations.
pub struct StubExtractor {
    outcome: Result<String, String>,
    calls: AtomicUsize,
}

impl StubExtractor {
    pub fn succeeding() -> Self {
        Self {
            outcome: Ok(STUB_METADATA.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MediaExtractor for StubExtractor {
    async fn extract(&self, _url: &Url, _max_height: Option<u32>) -> Result<Vec<u8>, PipelineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Ok(raw) => Ok(raw.clone().into_bytes()),
            Err(message) => Err(PipelineError::Extraction(message.clone())),
        }
    }
}

/// Resolver that maps every share link to one fixed target.
pub struct FixedResolver(pub &'static str);

#[async_trait]
impl RedirectResolver for FixedResolver {
    async fn resolve(&self, _url: &str) -> Result<String, BoxError> {
        Ok(self.0.to_string())
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: MemoryStore,
    pub extractor: Arc<StubExtractor>,
}

pub fn test_app(extractor: StubExtractor) -> TestApp {
    let store = MemoryStore::new();
    let extractor = Arc::new(extractor);
    let state = AppState {
        resolver: Arc::new(ResolveService::new(
            extractor.clone(),
            Arc::new(FixedResolver("https://www.facebook.com/reel/987")),
            Arc::new(store.clone()),
        )),
        accounts: Arc::new(AccountService::new(
            Arc::new(store.clone()),
            Some(SECRET.to_string()),
        )),
    };

    TestApp {
        router: router(state, cors_layer(&[])),
        store,
        extractor,
    }
}
