//! HTTP handlers for the help page

use axum::Json;

use shared::FaqEntry;

use crate::fixtures;

/// Frequently asked questions shown on the help page
pub async fn list_faqs() -> Json<Vec<FaqEntry>> {
    Json(fixtures::faqs())
}
