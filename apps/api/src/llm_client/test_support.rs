//! In-process stand-in for the generative provider, bound to 127.0.0.1.

use std::sync::{Arc, Mutex};

use axum::{
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode, Uri},
    Json, Router,
};
use serde_json::{json, Value};

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub path: String,
    pub api_key: Option<String>,
    pub body: Value,
}

pub struct MockProvider {
    pub base_url: String,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockProvider {
    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Serves `body` with `status` for every request and records what it received.
pub async fn spawn_provider(status: StatusCode, body: impl Into<String>) -> MockProvider {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let captured = requests.clone();
    let body: String = body.into();

    let app = Router::new().fallback(
        move |uri: Uri, headers: HeaderMap, Json(payload): Json<Value>| {
            let captured = captured.clone();
            let body = body.clone();
            async move {
                captured.lock().unwrap().push(CapturedRequest {
                    path: uri.path().to_string(),
                    api_key: headers
                        .get("x-goog-api-key")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string),
                    body: payload,
                });
                (status, [(CONTENT_TYPE, "application/json")], body)
            }
        },
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockProvider {
        base_url: format!("http://{addr}"),
        requests,
    }
}

/// A base URL nothing is listening on.
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// A successful `generateContent` envelope carrying `text` as its only part.
pub fn gemini_text_reply(text: &str) -> String {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }],
        "usageMetadata": { "promptTokenCount": 120, "candidatesTokenCount": 48 }
    })
    .to_string()
}
