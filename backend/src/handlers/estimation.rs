//! HTTP handlers for the crop price estimation workflow

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use shared::{EstimateResult, SavedEstimate};

use crate::error::AppResult;
use crate::services::estimation::SessionView;
use crate::AppState;

/// Start a new three-step estimation form session
pub async fn create_estimation_session(State(state): State<AppState>) -> Json<SessionView> {
    Json(state.estimations.create_session())
}

/// Get the current state of a session
pub async fn get_estimation_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<Json<SessionView>> {
    Ok(Json(state.estimations.session(session_id)?))
}

/// A single field update
#[derive(Debug, Deserialize)]
pub struct FieldUpdateInput {
    pub field: String,
    pub value: Value,
}

/// Update one field of the in-progress request
pub async fn update_estimation_field(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(input): Json<FieldUpdateInput>,
) -> AppResult<Json<SessionView>> {
    let session = state
        .estimations
        .set_field(session_id, &input.field, &input.value)?;
    Ok(Json(session))
}

#[derive(Debug, Deserialize)]
pub struct StepInput {
    pub step: u8,
}

/// Move the form to another step; entered values are kept either way
pub async fn go_to_estimation_step(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(input): Json<StepInput>,
) -> AppResult<Json<SessionView>> {
    Ok(Json(state.estimations.go_to_step(session_id, input.step)?))
}

/// Validate the request and compute the price estimate
pub async fn submit_estimation(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<Json<EstimateResult>> {
    let result = state.estimations.submit(session_id).await?;
    Ok(Json(result))
}

/// Save the current result; returns the full saved list
pub async fn save_estimate(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<Json<Vec<SavedEstimate>>> {
    Ok(Json(state.estimations.save_current_result(session_id)?))
}

/// Export saved estimates as CSV; 204 when nothing has been saved
pub async fn export_saved_estimates(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> AppResult<Response> {
    match state.estimations.export_saved(session_id)? {
        None => Ok(StatusCode::NO_CONTENT.into_response()),
        Some(csv_data) => Ok((
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"saved_predictions.csv\"",
                ),
            ],
            csv_data,
        )
            .into_response()),
    }
}
