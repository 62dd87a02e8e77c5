//! Job poll handler.

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::jobs::JobRecord;
use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Fetch the current record of a submitted job.
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JobRecord>, ApiError> {
    state
        .jobs
        .get(id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("No job with id {}", id)))
}
