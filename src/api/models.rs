//! API request and response models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Student record as stored and returned
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct Student {
    /// Identifier assigned by the collection on insert
    pub id: u64,
    pub name: String,
    /// Date of birth, kept as the client-submitted string
    pub dob: String,
    pub country: String,
    pub city: String,
    pub skills: Vec<String>,
    pub bio: String,
}

/// Payload for creating a student.
///
/// Every field is required; presence is checked in the handler so a missing
/// field produces the endpoint's flat 400 error rather than a
/// deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct StudentDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub bio: Option<String>,
}

/// Feedback record as stored and returned
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct Feedback {
    /// Identifier assigned by the collection on insert
    pub id: u64,
    pub name: String,
    pub message: String,
}

/// Payload for submitting feedback
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct FeedbackDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Root endpoint payload
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct WelcomeResponse {
    pub message: String,
    pub endpoints: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Unix timestamp of the check
    pub timestamp: i64,
    pub collections: CollectionSummary,
}

/// Sizes of the in-memory collections
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CollectionSummary {
    pub students: usize,
    pub feedbacks: usize,
}
