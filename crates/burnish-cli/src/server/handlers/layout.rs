//! Layout generation handler.

use std::collections::HashMap;

use axum::{Json, extract::State};
use serde::Serialize;
use uuid::Uuid;

use crate::jobs::{self, JobKind, LayoutRequest};
use crate::server::state::AppState;

/// Response for the layout submission endpoint.
///
/// `preview_url` and `download_urls` are filled in by a storage layer
/// this service does not have; they stay empty and the result is fetched
/// through the job poll interface instead.
#[derive(Serialize)]
pub struct LayoutResponse {
    pub status: &'static str,
    pub generation_id: Uuid,
    pub preview_url: Option<String>,
    pub download_urls: HashMap<String, String>,
}

/// Submit an asynchronous layout generation job.
pub async fn generate_layout(
    State(state): State<AppState>,
    Json(request): Json<LayoutRequest>,
) -> Json<LayoutResponse> {
    let generation_id = state.jobs.create(JobKind::LayoutGeneration).await;
    tracing::info!(job_id = %generation_id, layout_type = %request.layout_type, "layout job submitted");

    jobs::spawn_layout_job(state.jobs.clone(), generation_id, request);

    Json(LayoutResponse {
        status: "processing",
        generation_id,
        preview_url: None,
        download_urls: HashMap::new(),
    })
}
