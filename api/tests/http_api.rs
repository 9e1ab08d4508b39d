mod gemini_stub;

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};
use skinrelay_api::{
    application::http::server::http_server::{router, state},
    args::{Args, LlmArgs, LogArgs, MailArgs, ServerArgs},
};
use test_context::{AsyncTestContext, test_context};

struct HttpTestContext {
    server: TestServer,
}

fn test_args() -> Args {
    // Nothing listens here, so every model call fails fast.
    args_for("http://127.0.0.1:9", &["primary", "fallback"])
}

fn args_for(gemini_base_url: &str, models: &[&str]) -> Args {
    Args {
        server: ServerArgs {
            host: "127.0.0.1".to_string(),
            port: 0,
            allowed_origins: vec!["http://localhost:3000".to_string()],
            root_path: String::new(),
            metrics_enabled: false,
        },
        llm: LlmArgs {
            gemini_api_key: gemini_stub::API_KEY.to_string(),
            gemini_models: models.iter().map(|model| model.to_string()).collect(),
            gemini_base_url: gemini_base_url.to_string(),
        },
        mail: MailArgs {
            sender: "noreply@skinrelay.test".to_string(),
            subject: "Your Skincare Routine Analysis".to_string(),
            sendgrid_api_key: Some("test-sendgrid-key".to_string()),
            smtp_host: None,
            smtp_port: 587,
            smtp_username: String::new(),
            smtp_password: String::new(),
        },
        log: LogArgs {
            filter: "info".to_string(),
            json: false,
        },
    }
}

fn server(args: Args) -> TestServer {
    let state = state(Arc::new(args)).expect("state should build");
    let app = router(state).expect("router should build");

    TestServer::new(app).expect("test server should start")
}

/// Server whose model calls go to the local Gemini stub.
async fn stubbed_server(models: &[&str]) -> TestServer {
    let base_url = gemini_stub::spawn().await;
    server(args_for(&base_url, models))
}

impl AsyncTestContext for HttpTestContext {
    async fn setup() -> Self {
        Self {
            server: server(test_args()),
        }
    }
}

fn two_products() -> Value {
    json!({
        "products": [
            { "name": "Retinol Serum", "type": "serum" },
            { "name": "Vitamin C", "type": "serum" }
        ]
    })
}

#[test_context(HttpTestContext)]
#[tokio::test]
async fn test_analyze_without_products_is_rejected(ctx: &mut HttpTestContext) {
    let response = ctx.server.post("/analyze").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Products array is required." })
    );
}

#[test_context(HttpTestContext)]
#[tokio::test]
async fn test_analyze_with_empty_products_is_rejected(ctx: &mut HttpTestContext) {
    let response = ctx
        .server
        .post("/analyze")
        .json(&json!({ "products": [] }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"],
        json!("Products array is required.")
    );
}

#[test_context(HttpTestContext)]
#[tokio::test]
async fn test_unreachable_model_is_a_generic_failure(ctx: &mut HttpTestContext) {
    let response = ctx.server.post("/analyze").json(&two_products()).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Failed to process the request." })
    );
}

#[test_context(HttpTestContext)]
#[tokio::test]
async fn test_analyze_with_unusable_products_is_rejected(ctx: &mut HttpTestContext) {
    for body in [
        json!({ "products": null }),
        json!({ "products": "Retinol" }),
        json!({ "products": { "name": "Retinol" } }),
        json!(["Retinol"]),
    ] {
        let response = ctx.server.post("/analyze").json(&body).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>(),
            json!({ "error": "Products array is required." }),
            "body: {body}"
        );
    }
}

#[test_context(HttpTestContext)]
#[tokio::test]
async fn test_analyze_with_non_json_body_is_rejected(ctx: &mut HttpTestContext) {
    let response = ctx.server.post("/analyze").text("products=Retinol").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Products array is required." })
    );
}

#[tokio::test]
async fn test_analyze_returns_normalized_result() {
    let server = stubbed_server(&["fenced"]).await;

    let response = server.post("/analyze").json(&two_products()).await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({
            "products": [
                {
                    "name": "Retinol Serum",
                    "description": "",
                    "usageTime": ["PM"],
                    "frequency": "3 times a week",
                    "conflictsWith": []
                },
                {
                    "name": "Vitamin C",
                    "description": "",
                    "usageTime": [],
                    "frequency": "",
                    "conflictsWith": []
                }
            ],
            "recommendedRoutine": { "AM": ["Vitamin C"], "PM": [] },
            "conflicts": [
                { "products": ["Retinol Serum", "Vitamin C"], "reason": "irritation" }
            ]
        })
    );
}

#[tokio::test]
async fn test_analyze_falls_back_past_unsupported_and_failing_models() {
    let server = stubbed_server(&["embed-only", "overloaded", "fenced"]).await;

    let response = server.post("/analyze").json(&two_products()).await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["conflicts"][0]["reason"],
        json!("irritation")
    );
}

#[tokio::test]
async fn test_analyze_with_prose_reply_is_invalid_json() {
    let server = stubbed_server(&["chatty"]).await;

    let response = server.post("/analyze").json(&two_products()).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Gemini returned invalid JSON." })
    );
}

#[tokio::test]
async fn test_analyze_with_only_unsupported_models_fails() {
    let server = stubbed_server(&["embed-only", "missing"]).await;

    let response = server.post("/analyze").json(&two_products()).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Failed to process the request." })
    );
}

#[test_context(HttpTestContext)]
#[tokio::test]
async fn test_send_email_with_null_or_falsy_fields_is_rejected(ctx: &mut HttpTestContext) {
    for body in [
        json!({ "email": null, "analysisResult": { "products": [] } }),
        json!({ "email": 7, "analysisResult": { "products": [] } }),
        json!({ "email": "ada@example.com", "analysisResult": null }),
        json!({ "email": "ada@example.com", "analysisResult": false }),
        json!({ "email": "ada@example.com", "analysisResult": "" }),
        json!({ "email": "ada@example.com", "analysisResult": 0 }),
    ] {
        let response = ctx.server.post("/send-email").json(&body).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>(),
            json!({ "error": "Email and analysisResult are required." }),
            "body: {body}"
        );
    }
}

#[test_context(HttpTestContext)]
#[tokio::test]
async fn test_send_email_without_result_is_rejected(ctx: &mut HttpTestContext) {
    let response = ctx
        .server
        .post("/send-email")
        .json(&json!({ "email": "ada@example.com" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Email and analysisResult are required." })
    );
}

#[test_context(HttpTestContext)]
#[tokio::test]
async fn test_send_email_without_address_is_rejected(ctx: &mut HttpTestContext) {
    let response = ctx
        .server
        .post("/send-email")
        .json(&json!({
            "analysisResult": { "products": [], "recommendedRoutine": { "AM": [], "PM": [] }, "conflicts": [] }
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["error"],
        json!("Email and analysisResult are required.")
    );
}

#[test_context(HttpTestContext)]
#[tokio::test]
async fn test_health(ctx: &mut HttpTestContext) {
    let response = ctx.server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "status": "ok" }));
}

#[test_context(HttpTestContext)]
#[tokio::test]
async fn test_openapi_document_lists_routes(ctx: &mut HttpTestContext) {
    let response = ctx.server.get("/api-docs/openapi.json").await;

    response.assert_status_ok();
    let document = response.json::<Value>();
    assert!(document["paths"].get("/analyze").is_some());
    assert!(document["paths"].get("/send-email").is_some());
}
