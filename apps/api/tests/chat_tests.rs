#[allow(dead_code)]
mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

use common::{build_app, test_llm, TestClient};
use portfolio_api::chat::prompts::{CHAT_FALLBACK_MESSAGE, EMPTY_COMPLETION_PLACEHOLDER};
use portfolio_api::llm_client::LlmClient;

#[derive(Clone, Copy)]
enum StubMode {
    Reply(&'static str),
    EmptyContent,
    Failure,
}

#[derive(Clone)]
struct StubState {
    mode: StubMode,
    calls: Arc<AtomicUsize>,
}

async fn handle_completions(State(stub): State<StubState>, Json(_body): Json<Value>) -> Response {
    stub.calls.fetch_add(1, Ordering::SeqCst);
    match stub.mode {
        StubMode::Reply(text) => Json(json!({
            "choices": [{"message": {"role": "assistant", "content": text}}],
            "usage": {"prompt_tokens": 420, "completion_tokens": 7}
        }))
        .into_response(),
        StubMode::EmptyContent => Json(json!({
            "choices": [{"message": {"role": "assistant", "content": ""}}]
        }))
        .into_response(),
        StubMode::Failure => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": {"message": "model exploded"}})),
        )
            .into_response(),
    }
}

/// Serves an OpenAI-shaped chat-completions stub on an ephemeral port.
/// Returns the base URL and the upstream call counter.
async fn spawn_upstream(mode: StubMode) -> (String, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let app = Router::new()
        .route("/v1/chat/completions", post(handle_completions))
        .with_state(StubState {
            mode,
            calls: calls.clone(),
        });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub listener");
    let base_url = format!("http://{}/v1", listener.local_addr().unwrap());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (base_url, calls)
}

#[tokio::test]
async fn test_chat_returns_model_text() {
    let (base_url, calls) = spawn_upstream(StubMode::Reply("Hi there")).await;
    let client = TestClient::new(build_app(test_llm(&base_url)).await);

    let response = client
        .post_json("/api/chat", json!({"message": "Hello"}))
        .await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.json()["response"], "Hi there");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_chat_missing_message_never_calls_upstream() {
    let (base_url, calls) = spawn_upstream(StubMode::Reply("nooit")).await;
    let client = TestClient::new(build_app(test_llm(&base_url)).await);

    let response = client.post_json("/api/chat", json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.json()["message"].is_string());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_chat_non_string_message_is_rejected() {
    let (base_url, calls) = spawn_upstream(StubMode::Reply("nooit")).await;
    let client = TestClient::new(build_app(test_llm(&base_url)).await);

    let response = client.post_json("/api/chat", json!({"message": 42})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_chat_upstream_failure_yields_fallback() {
    let (base_url, calls) = spawn_upstream(StubMode::Failure).await;
    let client = TestClient::new(build_app(test_llm(&base_url)).await);

    let response = client
        .post_json("/api/chat", json!({"message": "Hallo"}))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json();
    assert_eq!(body["message"], CHAT_FALLBACK_MESSAGE);
    // The upstream cause must not leak into the response
    assert!(!body.to_string().contains("model exploded"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_chat_unreachable_upstream_yields_fallback() {
    // Nothing listens here; the connect fails immediately.
    let client = TestClient::new(build_app(test_llm("http://127.0.0.1:9/v1")).await);

    let response = client
        .post_json("/api/chat", json!({"message": "Hallo"}))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json()["message"], CHAT_FALLBACK_MESSAGE);
}

#[tokio::test]
async fn test_chat_empty_completion_gets_placeholder() {
    let (base_url, _calls) = spawn_upstream(StubMode::EmptyContent).await;
    let client = TestClient::new(build_app(test_llm(&base_url)).await);

    let response = client
        .post_json("/api/chat", json!({"message": "Hallo"}))
        .await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.json()["response"], EMPTY_COMPLETION_PLACEHOLDER);
}

#[tokio::test]
async fn test_chat_without_api_key_fails_without_calling_upstream() {
    let (base_url, calls) = spawn_upstream(StubMode::Reply("nooit")).await;
    let llm = LlmClient::new(None, base_url);
    let client = TestClient::new(build_app(llm).await);

    let response = client
        .post_json("/api/chat", json!({"message": "Hallo"}))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json()["message"], CHAT_FALLBACK_MESSAGE);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}
