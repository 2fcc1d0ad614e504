//! Request surface tests: the router exercised in-process with mock providers.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use sentiment_hub::adapters::api_client::HttpAnalysisClient;
use sentiment_hub::adapters::http::{AppState, app, router};
use sentiment_hub::adapters::providers::MockSentimentAdapter;
use sentiment_hub::domain::{AnalysisResult, DomainError, ProviderKind, Sentiment};
use sentiment_hub::ports::AnalysisApiPort;
use sentiment_hub::usecases::AnalysisService;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

fn service(custom: MockSentimentAdapter, chat: MockSentimentAdapter) -> Arc<AnalysisService> {
    Arc::new(
        AnalysisService::new()
            .with_provider(ProviderKind::Custom, Arc::new(custom))
            .with_provider(ProviderKind::Chat, Arc::new(chat)),
    )
}

fn happy_app() -> Router {
    let custom = MockSentimentAdapter::with_result(AnalysisResult::new(Sentiment::Positive, 0.93))
        .with_delay(0);
    let chat = MockSentimentAdapter::with_result(AnalysisResult::new(Sentiment::Negative, 0.81))
        .with_delay(0);
    router(AppState::new(service(custom, chat), false))
}

fn failing_app(expose_details: bool) -> Router {
    let failing = || {
        MockSentimentAdapter::failing(DomainError::ProviderResponseInvalid(
            "Invalid JSON response from model".to_string(),
        ))
    };
    router(AppState::new(service(failing(), failing()), expose_details))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), 64 * 1024).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn post_analyze(app: Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

#[tokio::test]
async fn analyze_custom_model() {
    let (status, body) = post_analyze(
        happy_app(),
        json!({"text": "This is amazing!", "model": "custom"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"sentiment": "positive", "confidence": 0.93}));
}

#[tokio::test]
async fn analyze_llama_model() {
    let (status, body) = post_analyze(
        happy_app(),
        json!({"text": "This is terrible!", "model": "llama"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sentiment"], "negative");
    let confidence = body["confidence"].as_f64().unwrap();
    assert!((0.0..=1.0).contains(&confidence));
}

#[tokio::test]
async fn empty_text_is_bad_request_for_any_model() {
    for model in ["custom", "llama", "unknown"] {
        let (status, body) = post_analyze(happy_app(), json!({"text": "", "model": model})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Text is required");
    }
}

#[tokio::test]
async fn missing_text_is_bad_request() {
    let (status, body) = post_analyze(happy_app(), json!({"model": "custom"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn invalid_model_is_bad_request() {
    let (status, body) = post_analyze(
        happy_app(),
        json!({"text": "Test text", "model": "invalid"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid model specified");
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(happy_app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid request body"));
}

#[tokio::test]
async fn provider_failure_is_internal_error_without_details() {
    let (status, body) = post_analyze(
        failing_app(false),
        json!({"text": "Anything", "model": "llama"}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");
    assert_eq!(body["message"], "Invalid JSON response from model");
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn provider_failure_includes_details_in_development() {
    let (status, body) = post_analyze(
        failing_app(true),
        json!({"text": "Anything", "model": "custom"}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        body["details"]
            .as_str()
            .unwrap()
            .contains("ProviderResponseInvalid")
    );
}

#[tokio::test]
async fn health_reports_healthy() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(happy_app(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy"}));
}

#[tokio::test]
async fn cors_preflight_allows_frontend_origin() {
    let custom = MockSentimentAdapter::new().with_delay(0);
    let chat = MockSentimentAdapter::new().with_delay(0);
    let app = app(
        AppState::new(service(custom, chat), false),
        "http://localhost:3001",
    )
    .unwrap();

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/analyze")
        .header(header::ORIGIN, "http://localhost:3001")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "http://localhost:3001"
    );
}

async fn spawn_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn api_client_round_trip() {
    let client = HttpAnalysisClient::new(spawn_server(happy_app()).await);

    assert_eq!(client.health().await.unwrap(), "healthy");

    let result = client
        .analyze("This is amazing!", ProviderKind::Custom)
        .await
        .unwrap();
    assert_eq!(result, AnalysisResult::new(Sentiment::Positive, 0.93));

    let err = client.analyze("   ", ProviderKind::Chat).await.unwrap_err();
    assert_eq!(err, DomainError::Api("Text is required".to_string()));
}

#[tokio::test]
async fn api_client_surfaces_server_error_message() {
    let client = HttpAnalysisClient::new(spawn_server(failing_app(false)).await);

    let err = client
        .analyze("Anything", ProviderKind::Chat)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        DomainError::Api("Internal server error: Invalid JSON response from model".to_string())
    );
}

#[tokio::test]
async fn api_client_unreachable_server() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpAnalysisClient::new(format!("http://{}", addr));
    let err = client.health().await.unwrap_err();
    assert!(matches!(err, DomainError::Api(_)));
}
