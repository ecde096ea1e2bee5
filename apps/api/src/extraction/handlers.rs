//! Axum route handler for resume uploads.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extraction::{parse_resume, DocumentKind};
use crate::models::bullet::BulletPoint;
use crate::state::AppState;

const UPLOAD_FIELD: &str = "file";

/// POST /api/parse-resume
///
/// Accepts a multipart upload (field `file`, `.pdf` or `.docx`) and returns
/// the extracted bullets in document order. The file is parsed in memory and
/// never written to disk.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Vec<BulletPoint>>, AppError> {
    let limit = state.config.max_upload_size;
    let multipart_error = |err: MultipartError| {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(limit)
        } else {
            AppError::Validation(format!("Invalid multipart body: {}", err.body_text()))
        }
    };

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let kind = DocumentKind::from_filename(&filename).ok_or_else(|| {
            AppError::Validation("Only PDF and DOCX files are supported".to_string())
        })?;

        let data: Bytes = field.bytes().await.map_err(multipart_error)?;
        if data.len() > limit {
            return Err(AppError::PayloadTooLarge(limit));
        }
        info!("Parsing {:?} upload '{}' ({} bytes)", kind, filename, data.len());

        // CPU-bound parse runs off the async executor.
        let bullets = tokio::task::spawn_blocking(move || parse_resume(kind, &data))
            .await
            .map_err(|e| {
                // pdf-extract can panic on malformed input; treat it as a parse failure.
                warn!("Resume parse task aborted: {e}");
                AppError::Parsing(format!("parser aborted on '{filename}'"))
            })?
            .map_err(|e| AppError::Parsing(e.to_string()))?;

        return Ok(Json(bullets));
    }

    Err(AppError::Validation(format!(
        "Missing '{UPLOAD_FIELD}' field in multipart body"
    )))
}
