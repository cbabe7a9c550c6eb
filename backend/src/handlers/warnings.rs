//! HTTP handlers for early warning endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::AppResult;
use crate::services::warning::WarningView;
use crate::AppState;

/// Query parameters for the warning list
#[derive(Debug, Deserialize)]
pub struct WarningListQuery {
    pub severity: Option<String>,
}

/// List warnings, optionally filtered by severity tier
pub async fn list_warnings(
    State(state): State<AppState>,
    Query(query): Query<WarningListQuery>,
) -> AppResult<Json<Vec<WarningView>>> {
    let warnings = state.warnings.list(query.severity.as_deref())?;
    Ok(Json(warnings))
}

/// Get one warning by its ID
pub async fn get_warning(
    State(state): State<AppState>,
    Path(warning_id): Path<String>,
) -> AppResult<Json<WarningView>> {
    let warning = state.warnings.get(&warning_id)?;
    Ok(Json(warning))
}
