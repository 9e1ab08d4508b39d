//! In-process stand-in for the Gemini REST API.
//!
//! Model names pick the behaviour:
//! - `embed-only` exists but cannot `generateContent`
//! - `missing` is unknown (404)
//! - `fenced` replies with JSON wrapped in a markdown fence
//! - `chatty` replies with prose instead of JSON
//! - `overloaded` resolves but fails to generate (503)
#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::Path,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub const API_KEY: &str = "stub-key";

pub const FENCED_REPLY: &str = r#"```json
{
  "products": [
    { "name": "Retinol Serum", "usageTime": ["PM"], "frequency": "3 times a week" },
    { "name": "Vitamin C" }
  ],
  "recommendedRoutine": { "AM": ["Vitamin C"] },
  "conflicts": [
    { "productA": "Retinol Serum", "productB": "Vitamin C", "explanation": "irritation" }
  ]
}
```"#;

pub const CHATTY_REPLY: &str = "Sure! Retinol and Vitamin C are best used apart.";

/// Serves the stub on an ephemeral port and returns its base URL.
pub async fn spawn() -> String {
    let app = Router::new().route("/models/{model}", get(model_info).post(generate_content));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("stub listener should bind");
    let addr = listener.local_addr().expect("stub listener has an address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server failed");
    });

    format!("http://{addr}")
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("x-goog-api-key")
        .and_then(|value| value.to_str().ok())
        == Some(API_KEY)
}

async fn model_info(Path(model): Path<String>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return StatusCode::FORBIDDEN.into_response();
    }

    let methods = match model.as_str() {
        "missing" => return StatusCode::NOT_FOUND.into_response(),
        "embed-only" => json!(["embedContent"]),
        _ => json!(["generateContent", "countTokens"]),
    };

    Json(json!({
        "name": format!("models/{model}"),
        "supportedGenerationMethods": methods
    }))
    .into_response()
}

async fn generate_content(
    Path(target): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !authorized(&headers) {
        return StatusCode::FORBIDDEN.into_response();
    }

    let Some(model) = target.strip_suffix(":generateContent") else {
        return StatusCode::NOT_FOUND.into_response();
    };

    if !body["contents"][0]["parts"][0]["text"].is_string() {
        return StatusCode::BAD_REQUEST.into_response();
    }

    let text = match model {
        "fenced" => FENCED_REPLY,
        "chatty" => CHATTY_REPLY,
        _ => return StatusCode::SERVICE_UNAVAILABLE.into_response(),
    };

    Json(json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    }))
    .into_response()
}
