//! HTTP request handlers for the collection and service endpoints

use crate::api::models::{
    CollectionSummary, Feedback, FeedbackDraft, HealthResponse, Student, StudentDraft,
    WelcomeResponse,
};
use crate::error::AppError;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

/// Service welcome payload
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message and endpoint list", body = WelcomeResponse)
    ),
    tag = "Service"
)]
pub async fn home(State(_state): State<Arc<AppState>>) -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Textlab API".to_string(),
        endpoints: vec![
            "/api/students".to_string(),
            "/api/feedbacks".to_string(),
            "/api/text/analyze".to_string(),
        ],
    })
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service status and collection sizes", body = HealthResponse)
    ),
    tag = "Service"
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().timestamp(),
        collections: CollectionSummary {
            students: state.students.len(),
            feedbacks: state.feedbacks.len(),
        },
    })
}

/// List all students
#[utoipa::path(
    get,
    path = "/api/students",
    responses(
        (status = 200, description = "All students in insertion order", body = [Student])
    ),
    tag = "Students"
)]
pub async fn list_students(State(state): State<Arc<AppState>>) -> Json<Vec<Student>> {
    Json(state.students.all())
}

/// Fetch one student by id
#[utoipa::path(
    get,
    path = "/api/students/{id}",
    params(
        ("id" = u64, Path, description = "Student identifier")
    ),
    responses(
        (status = 200, description = "The student record", body = Student),
        (status = 404, description = "No student with this id", body = crate::error::ErrorBody)
    ),
    tag = "Students"
)]
pub async fn get_student(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<Student>, AppError> {
    let student = state
        .students
        .find(|s| s.id == id)
        .ok_or_else(|| AppError::NotFound("student".to_string()))?;

    Ok(Json(student))
}

/// Register a new student
#[utoipa::path(
    post,
    path = "/api/students",
    request_body = StudentDraft,
    responses(
        (status = 201, description = "Stored student with assigned id", body = Student),
        (status = 400, description = "One or more required fields missing", body = crate::error::ErrorBody)
    ),
    tag = "Students"
)]
pub async fn create_student(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<StudentDraft>,
) -> Result<(StatusCode, Json<Student>), AppError> {
    let StudentDraft {
        name,
        dob,
        country,
        city,
        skills,
        bio,
    } = draft;

    let (Some(name), Some(dob), Some(country), Some(city), Some(skills), Some(bio)) =
        (name, dob, country, city, skills, bio)
    else {
        return Err(AppError::InvalidRequest("missing fields".to_string()));
    };

    let student = state.students.insert_with(|id| Student {
        id,
        name,
        dob,
        country,
        city,
        skills,
        bio,
    });

    info!(id = student.id, name = %student.name, "Student registered");

    Ok((StatusCode::CREATED, Json(student)))
}

/// List all feedback entries
#[utoipa::path(
    get,
    path = "/api/feedbacks",
    responses(
        (status = 200, description = "All feedback entries in insertion order", body = [Feedback])
    ),
    tag = "Feedback"
)]
pub async fn list_feedbacks(State(state): State<Arc<AppState>>) -> Json<Vec<Feedback>> {
    Json(state.feedbacks.all())
}

/// Submit feedback
#[utoipa::path(
    post,
    path = "/api/feedbacks",
    request_body = FeedbackDraft,
    responses(
        (status = 201, description = "Stored feedback with assigned id", body = Feedback),
        (status = 400, description = "Name or message missing", body = crate::error::ErrorBody)
    ),
    tag = "Feedback"
)]
pub async fn create_feedback(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<FeedbackDraft>,
) -> Result<(StatusCode, Json<Feedback>), AppError> {
    let (Some(name), Some(message)) = (draft.name, draft.message) else {
        return Err(AppError::InvalidRequest(
            "missing name or message".to_string(),
        ));
    };

    let feedback = state.feedbacks.insert_with(|id| Feedback { id, name, message });

    info!(id = feedback.id, "Feedback submitted");

    Ok((StatusCode::CREATED, Json(feedback)))
}
