//! Axum route handlers for categorization and analytics.

use axum::Json;

use crate::analysis::analytics::calculate_analytics;
use crate::models::analysis::Analytics;
use crate::models::bin::{default_bins, Bin};

/// GET /api/bins
///
/// The empty bins a student starts sorting into.
pub async fn handle_default_bins() -> Json<Vec<Bin>> {
    Json(default_bins())
}

/// POST /api/analytics
///
/// Takes the student's bins (with their sorted bullets) and returns the
/// distribution, top category and suggestions.
pub async fn handle_analytics(Json(bins): Json<Vec<Bin>>) -> Json<Analytics> {
    Json(calculate_analytics(&bins))
}
