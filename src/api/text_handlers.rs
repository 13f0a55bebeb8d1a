//! Text analysis API handler

use crate::analysis::AnalysisReport;
use crate::error::AppError;
use crate::AppState;
use axum::{extract::State, Json};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

/// Analyze request body
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct AnalyzeRequest {
    /// The text to analyze; absent or blank text is rejected with 400
    #[serde(default)]
    pub text: Option<String>,
}

/// Analyze a piece of text and return its statistics report
#[utoipa::path(
    post,
    path = "/api/text/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Statistics for the submitted text", body = AnalysisReport),
        (status = 400, description = "Missing or blank text field", body = crate::error::ErrorBody)
    ),
    tag = "Text"
)]
pub async fn analyze_text(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    let text = request
        .text
        .ok_or_else(|| AppError::InvalidRequest("no text provided".to_string()))?;

    if text.trim().is_empty() {
        return Err(AppError::InvalidRequest("text is empty".to_string()));
    }

    let report = state.analyzer.analyze(&text);

    info!(
        characters = report.character_count,
        words = report.word_count,
        "Text analyzed"
    );

    Ok(Json(report))
}
