//! HTTP route definitions

use crate::analysis::{AnalysisReport, WordCount};
use crate::api::handlers;
use crate::api::models::*;
use crate::api::text_handlers::{self, AnalyzeRequest};
use crate::error::ErrorBody;
use crate::middleware::rate_limit::RateLimitLayer;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Textlab API",
        version = "0.2.0",
        description = "Text statistics REST service over small in-memory collections.",
        license(name = "MIT"),
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        handlers::home,
        handlers::health_check,
        handlers::list_students,
        handlers::get_student,
        handlers::create_student,
        handlers::list_feedbacks,
        handlers::create_feedback,
        text_handlers::analyze_text,
    ),
    components(schemas(
        WelcomeResponse,
        HealthResponse,
        CollectionSummary,
        Student,
        StudentDraft,
        Feedback,
        FeedbackDraft,
        AnalyzeRequest,
        AnalysisReport,
        WordCount,
        ErrorBody,
    )),
    tags(
        (name = "Text", description = "Text analysis endpoint"),
        (name = "Students", description = "Student collection endpoints"),
        (name = "Feedback", description = "Feedback collection endpoints"),
        (name = "Service", description = "Welcome and health endpoints"),
    )
)]
pub struct ApiDoc;

/// Create the main application router
pub async fn create_router(state: Arc<crate::AppState>) -> Router {
    // Get configuration for middleware
    let (rate_limit_enabled, rps, burst, timeout_ms) = {
        let config = state.settings.read().await;
        (
            config.rate_limit.enabled,
            config.rate_limit.requests_per_second,
            config.rate_limit.burst_size,
            config.server.request_timeout_ms,
        )
    };

    // Collection and analysis routes, rate limited when enabled
    let api_routes = Router::new()
        .route("/text/analyze", post(text_handlers::analyze_text))
        .route(
            "/students",
            get(handlers::list_students).post(handlers::create_student),
        )
        .route("/students/:id", get(handlers::get_student))
        .route(
            "/feedbacks",
            get(handlers::list_feedbacks).post(handlers::create_feedback),
        );

    let api_routes = if rate_limit_enabled {
        api_routes.layer(RateLimitLayer::new(rps, burst))
    } else {
        api_routes
    };

    // Build the full router
    Router::new()
        // Welcome and health endpoints (never rate limited)
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health_check))
        // OpenAPI document
        .route(
            "/api-docs/openapi.json",
            get(|| async { axum::Json(<ApiDoc as OpenApi>::openapi()) }),
        )
        // API routes under /api prefix
        .nest("/api", api_routes)
        // Add shared state
        .with_state(state)
        // Outer layers
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_millis(timeout_ms)))
}
