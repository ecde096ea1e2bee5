pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::export::handlers as export;
use crate::extraction::handlers as extraction;
use crate::narrative::handlers as narrative;
use crate::state::AppState;

/// Multipart framing on top of the file itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_size + MULTIPART_OVERHEAD;

    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/api/parse-resume", post(extraction::handle_parse_resume))
        .route("/api/bins", get(analysis::handle_default_bins))
        .route("/api/analytics", post(analysis::handle_analytics))
        .route("/api/narrative", post(narrative::handle_narrative))
        .route("/api/export/json", post(export::handle_export_json))
        .route("/api/export/html", post(export::handle_export_html))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
