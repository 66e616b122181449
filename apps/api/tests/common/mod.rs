use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use portfolio_api::llm_client::LlmClient;
use portfolio_api::routes::build_router;
use portfolio_api::state::AppState;
use portfolio_api::store::{seed, ContentStore, MemContentStore};

/// Builds the full router on a freshly seeded in-memory store.
pub async fn build_app(llm: LlmClient) -> Router {
    let store: Arc<dyn ContentStore> = Arc::new(MemContentStore::new());
    seed::seed_if_empty(store.as_ref())
        .await
        .expect("Failed to seed content store");
    build_router(AppState { store, llm })
}

/// An LLM client pointed at `base_url` with a dummy key.
pub fn test_llm(base_url: &str) -> LlmClient {
    LlmClient::new(Some("test-key".to_string()), base_url.to_string())
}

/// Helper to make in-process requests to the test app.
pub struct TestClient {
    router: Router,
}

impl TestClient {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");
        self.request(request).await
    }

    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");
        self.request(request).await
    }

    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes()
            .to_vec();

        TestResponse { status, body }
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    body: Vec<u8>,
}

impl TestResponse {
    pub fn assert_status(&self, expected: StatusCode) {
        assert_eq!(
            self.status,
            expected,
            "unexpected status, body: {}",
            String::from_utf8_lossy(&self.body)
        );
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("Response body is not valid JSON")
    }
}
