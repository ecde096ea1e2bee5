//! Axum route handlers for the Export API.

use axum::{
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;

use crate::errors::AppError;
use crate::export::document::{export_to_html, export_to_json};
use crate::models::analysis::AnalysisResult;

/// POST /api/export/json
///
/// Returns the analysis as a downloadable `career_analysis_YYYYMMDD.json`.
pub async fn handle_export_json(
    Json(result): Json<AnalysisResult>,
) -> Result<Response, AppError> {
    let body = export_to_json(&result)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("JSON export failed: {e}")))?;

    Ok(attachment(body, "application/json", "json"))
}

/// POST /api/export/html
///
/// Printable HTML rendering with bold/italic spans preserved.
pub async fn handle_export_html(Json(result): Json<AnalysisResult>) -> Response {
    attachment(export_to_html(&result), "text/html; charset=utf-8", "html")
}

fn attachment(body: String, content_type: &'static str, extension: &str) -> Response {
    let disposition = format!(
        "attachment; filename=career_analysis_{}.{extension}",
        Utc::now().format("%Y%m%d")
    );
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response()
}
