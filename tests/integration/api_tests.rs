//! API endpoint integration tests
//!
//! The router is exercised in-process through `tower::ServiceExt::oneshot`;
//! no sockets are opened.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use textlab_api::api::routes::create_router;
use textlab_api::config::Settings;
use textlab_api::AppState;
use tower::ServiceExt;

fn test_settings() -> Settings {
    let mut settings = Settings::default();
    settings.rate_limit.enabled = false;
    settings
}

async fn test_app() -> Router {
    let state = Arc::new(AppState::new(test_settings()));
    create_router(state).await
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

#[tokio::test]
async fn test_home_lists_endpoints() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], json!("Welcome to the Textlab API"));
    assert_eq!(body["endpoints"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_health_reports_empty_collections() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("ok"));
    assert_eq!(body["collections"]["students"], json!(0));
    assert_eq!(body["collections"]["feedbacks"], json!(0));
}

#[tokio::test]
async fn test_analyze_returns_full_report() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/text/analyze",
        Some(json!({"text": "Hello hello HELLO world"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["character_count"], json!(23));
    assert_eq!(body["word_count"], json!(4));
    assert_eq!(body["line_count"], json!(1));
    assert_eq!(body["unique_word_count"], json!(2));
    assert_eq!(
        body["most_common_words"],
        json!([["hello", 3], ["world", 1]])
    );
    assert_eq!(body["average_word_length"], json!(5.0));
    assert_eq!(body["estimated_reading_time_minutes"], json!(0.0));
}

#[tokio::test]
async fn test_analyze_sentence_count_keeps_trailing_segment() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/text/analyze",
        Some(json!({"text": "One. Two! Three?"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sentence_count"], json!(4));
}

#[tokio::test]
async fn test_analyze_without_text_field_is_rejected() {
    let app = test_app().await;

    let (status, body) = send(&app, "POST", "/api/text/analyze", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("no text provided"));
}

#[tokio::test]
async fn test_analyze_blank_text_is_rejected() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/text/analyze",
        Some(json!({"text": "   \n  "})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("text is empty"));
}

#[tokio::test]
async fn test_student_lifecycle() {
    let app = test_app().await;

    // Starts empty
    let (status, body) = send(&app, "GET", "/api/students", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    // Create
    let draft = json!({
        "name": "Ada Lovelace",
        "dob": "1815-12-10",
        "country": "UK",
        "city": "London",
        "skills": ["math", "analysis"],
        "bio": "First programmer"
    });
    let (status, body) = send(&app, "POST", "/api/students", Some(draft)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], json!(1));
    assert_eq!(body["name"], json!("Ada Lovelace"));

    // Fetch by id
    let (status, body) = send(&app, "GET", "/api/students/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["city"], json!("London"));

    // Unknown id
    let (status, body) = send(&app, "GET", "/api/students/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("student not found"));
}

#[tokio::test]
async fn test_student_with_missing_fields_is_rejected() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/students",
        Some(json!({"name": "No bio"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("missing fields"));

    // Nothing was stored
    let (_, body) = send(&app, "GET", "/api/students", None).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_feedback_lifecycle() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/feedbacks",
        Some(json!({"name": "Grace", "message": "Nice service"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], json!(1));

    let (status, body) = send(&app, "GET", "/api/feedbacks", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["message"], json!("Nice service"));
}

#[tokio::test]
async fn test_feedback_requires_name_and_message() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/feedbacks",
        Some(json!({"name": "Grace"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("missing name or message"));
}

#[tokio::test]
async fn test_rate_limit_rejects_past_burst() {
    let mut settings = Settings::default();
    settings.rate_limit.enabled = true;
    settings.rate_limit.requests_per_second = 1;
    settings.rate_limit.burst_size = 2;

    let state = Arc::new(AppState::new(settings));
    let app = create_router(state).await;

    let payload = json!({"text": "hello"});
    let (status, _) = send(&app, "POST", "/api/text/analyze", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "POST", "/api/text/analyze", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "POST", "/api/text/analyze", Some(payload)).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["error"], json!("rate limit exceeded"));

    // Unlimited routes are unaffected
    let (status, _) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/api-docs/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], json!("Textlab API"));
    assert!(body["paths"]["/api/text/analyze"].is_object());
}
