//! Router harness for integration testing.
//!
//! Each harness owns a fresh temporary data directory and serves the real
//! router with mock collaborators injected through the kernel traits.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use server_core::kernel::{BaseAI, MockAI, MockWebScraper, ScraperRunner, ServerDeps};
use server_core::server::build_app;
use tempfile::TempDir;
use tower::ServiceExt;

/// Interpreter name that will never resolve on PATH.
pub const MISSING_INTERPRETER: &str = "no-such-python-interpreter";

pub struct TestHarness {
    pub data_dir: TempDir,
    pub ai: Option<Arc<MockAI>>,
    pub web: Arc<MockWebScraper>,
    router: Router,
}

impl TestHarness {
    /// Harness with a mock AI and no article pages.
    pub fn new(ai: MockAI) -> Self {
        Self::build(Some(ai), MockWebScraper::new(), vec![MISSING_INTERPRETER.to_string()])
    }

    /// Harness without an API key configured.
    pub fn without_ai() -> Self {
        Self::build(None, MockWebScraper::new(), vec![MISSING_INTERPRETER.to_string()])
    }

    pub fn with_pages(ai: MockAI, web: MockWebScraper) -> Self {
        Self::build(Some(ai), web, vec![MISSING_INTERPRETER.to_string()])
    }

    pub fn with_interpreters(candidates: Vec<String>) -> Self {
        Self::build(Some(MockAI::new()), MockWebScraper::new(), candidates)
    }

    fn build(ai: Option<MockAI>, web: MockWebScraper, candidates: Vec<String>) -> Self {
        // Uses try_init() to avoid panicking if already initialized.
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let data_dir = tempfile::tempdir().expect("Failed to create temp data dir");
        let ai = ai.map(Arc::new);
        let web = Arc::new(web);

        let scraper_runner = ScraperRunner::new(data_dir.path(), Duration::from_secs(10))
            .with_candidates(candidates);
        let deps = ServerDeps::new(
            data_dir.path().to_path_buf(),
            ai.clone().map(|ai| ai as Arc<dyn BaseAI>),
            None,
            web.clone(),
            scraper_runner,
        );

        Self {
            router: build_app(deps, &[]),
            data_dir,
            ai,
            web,
        }
    }

    pub fn path(&self) -> &Path {
        self.data_dir.path()
    }

    pub fn mock_ai(&self) -> &MockAI {
        self.ai.as_deref().expect("Harness has no mock AI")
    }

    /// Write a file (creating parent directories) under the data directory.
    pub fn write_file(&self, name: &str, contents: &str) {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(path, contents).expect("Failed to write test file");
    }

    pub fn read_json(&self, name: &str) -> Value {
        let raw = std::fs::read_to_string(self.path().join(name)).expect("Failed to read file");
        serde_json::from_str(&raw).expect("File is not valid JSON")
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, Body::empty()).await
    }

    pub async fn post(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Body::empty()).await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Body::from(body.to_string())).await
    }

    pub async fn post_raw(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Body::from(body.to_string())).await
    }

    async fn send(&self, method: Method, uri: &str, body: Body) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Response is not JSON")
        };
        (status, json)
    }
}
