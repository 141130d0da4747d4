//! Client tests against a local stand-in for the Generative Language API.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use gemini_client::{GeminiClient, GeminiError, GenerateRequest};
use serde_json::{json, Value};

#[derive(Clone, Default)]
struct Seen {
    requests: Arc<Mutex<Vec<(String, Option<String>, Value)>>>,
}

/// Serve `reply` for every model; `missing-model` answers 404 and
/// `busy-model` answers 503.
async fn spawn_server(reply: Value) -> (String, Seen) {
    let seen = Seen::default();

    let handler = move |State(seen): State<Seen>,
                        Path(target): Path<String>,
                        headers: HeaderMap,
                        Json(body): Json<Value>| {
        let reply = reply.clone();
        async move {
            let key = headers
                .get("x-goog-api-key")
                .and_then(|v| v.to_str().ok())
                .map(String::from);
            seen.requests.lock().unwrap().push((target.clone(), key, body));

            if target.starts_with("missing-model") {
                return (
                    StatusCode::NOT_FOUND,
                    Json(json!({"error": {"code": 404, "message": "models/missing-model is not found for API version v1beta", "status": "NOT_FOUND"}})),
                );
            }
            if target.starts_with("busy-model") {
                return (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({"error": {"code": 503, "message": "The model is overloaded. Please try again later.", "status": "UNAVAILABLE"}})),
                );
            }
            (StatusCode::OK, Json(reply))
        }
    };

    let app = Router::new()
        .route("/v1beta/models/:target", post(handler))
        .with_state(seen.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), seen)
}

#[tokio::test]
async fn generate_text_joins_first_candidate_parts() {
    let reply = json!({
        "candidates": [
            {"content": {"role": "model", "parts": [{"text": "Zeiss: 45%\n"}, {"text": "Canon: 30%"}]}, "finishReason": "STOP"},
            {"content": {"role": "model", "parts": [{"text": "ignored"}]}}
        ],
        "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 8, "totalTokenCount": 20}
    });
    let (base_url, seen) = spawn_server(reply).await;
    let client = GeminiClient::new("secret-key").with_base_url(base_url);

    let text = client
        .generate_text("gemini-2.5-flash", ["prompt", "articles"])
        .await
        .unwrap();
    assert_eq!(text, "Zeiss: 45%\nCanon: 30%");

    let requests = seen.requests.lock().unwrap().clone();
    assert_eq!(requests.len(), 1);
    let (target, key, body) = &requests[0];
    assert_eq!(target, "gemini-2.5-flash:generateContent");
    assert_eq!(key.as_deref(), Some("secret-key"));
    assert_eq!(
        body,
        &json!({"contents": [{"role": "user", "parts": [{"text": "prompt"}, {"text": "articles"}]}]})
    );
}

#[tokio::test]
async fn generate_content_reports_finish_reason_and_usage() {
    let reply = json!({
        "candidates": [{"content": {"parts": [{"text": "ok"}]}, "finishReason": "MAX_TOKENS"}],
        "usageMetadata": {"promptTokenCount": 3, "candidatesTokenCount": 1, "totalTokenCount": 4}
    });
    let (base_url, seen) = spawn_server(reply).await;
    let client = GeminiClient::new("k").with_base_url(base_url);

    let response = client
        .generate_content(
            "models/gemini-2.5-flash",
            GenerateRequest::from_parts(["hi"]),
        )
        .await
        .unwrap();

    assert_eq!(response.text, "ok");
    assert_eq!(response.finish_reason.as_deref(), Some("MAX_TOKENS"));
    assert_eq!(response.usage.map(|u| u.total_token_count), Some(4));

    let requests = seen.requests.lock().unwrap().clone();
    assert_eq!(requests[0].0, "gemini-2.5-flash:generateContent");
}

#[tokio::test]
async fn empty_candidates_yield_empty_text() {
    let (base_url, _) = spawn_server(json!({"candidates": []})).await;
    let client = GeminiClient::new("k").with_base_url(base_url);

    let text = client.generate_text("gemini-2.5-flash", ["hi"]).await.unwrap();
    assert!(text.is_empty());
}

#[tokio::test]
async fn api_errors_are_classified() {
    let (base_url, _) = spawn_server(json!({})).await;
    let client = GeminiClient::new("k").with_base_url(base_url);

    let missing = client.generate_text("missing-model", ["hi"]).await.unwrap_err();
    assert_eq!(missing.status(), Some(404));
    assert!(missing.is_model_unavailable());
    assert!(!missing.is_overloaded());
    assert!(missing.to_string().contains("is not found"));

    let busy = client.generate_text("busy-model", ["hi"]).await.unwrap_err();
    assert!(matches!(busy, GeminiError::Api { status: 503, .. }));
    assert!(busy.is_overloaded());
    assert!(!busy.is_model_unavailable());
}
