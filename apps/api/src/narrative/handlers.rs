//! Axum route handler for narrative feedback.

use axum::{extract::State, Json};
use tracing::error;

use crate::errors::AppError;
use crate::llm_client::LlmError;
use crate::models::analysis::AnalysisResult;
use crate::narrative::models::NarrativeResponse;
use crate::narrative::service::generate_narrative;
use crate::state::AppState;

/// POST /api/narrative
///
/// 503 when no narrative backend is configured; upstream auth and rate-limit
/// failures keep their meaning (401 / 429).
pub async fn handle_narrative(
    State(state): State<AppState>,
    Json(analysis): Json<AnalysisResult>,
) -> Result<Json<NarrativeResponse>, AppError> {
    let backend = state.narrator.as_deref().ok_or_else(|| {
        error!("Narrative backend not configured");
        AppError::NarrativeUnavailable(
            "Narrative analysis is not available. Configure NARRATIVE_API_KEY.".to_string(),
        )
    })?;

    let narrative = generate_narrative(&analysis, backend)
        .await
        .map_err(map_llm_error)?;

    Ok(Json(narrative))
}

fn map_llm_error(err: LlmError) -> AppError {
    if matches!(err, LlmError::NotConfigured) {
        AppError::NarrativeUnavailable(err.to_string())
    } else if err.is_auth() {
        AppError::LlmAuth
    } else if err.is_rate_limit() {
        AppError::RateLimited
    } else {
        AppError::Llm(format!("Failed to generate narrative: {err}"))
    }
}
