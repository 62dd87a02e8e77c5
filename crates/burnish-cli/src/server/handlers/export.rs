//! Export submission handler.

use axum::{Json, extract::State};
use serde::Serialize;
use uuid::Uuid;

use crate::jobs::{self, ExportRequest, ExportType, JobKind};
use crate::server::state::AppState;

/// Response for the export submission endpoint.
#[derive(Serialize)]
pub struct ExportResponse {
    pub status: &'static str,
    pub export_id: Uuid,
    /// Always null: artifacts are returned through the job poll
    /// interface, not a file store.
    pub file_url: Option<String>,
    pub metadata: ExportMetadata,
}

#[derive(Serialize)]
pub struct ExportMetadata {
    pub export_type: ExportType,
    pub product_count: usize,
    pub format: String,
}

/// Submit an asynchronous export job.
pub async fn prompt_export(
    State(state): State<AppState>,
    Json(request): Json<ExportRequest>,
) -> Json<ExportResponse> {
    let export_id = state.jobs.create(JobKind::Export).await;
    tracing::info!(job_id = %export_id, export_type = %request.export_type, "export job submitted");

    let metadata = ExportMetadata {
        export_type: request.export_type,
        product_count: request.product_ids.len(),
        format: request.format.clone(),
    };

    jobs::spawn_export_job(
        state.jobs.clone(),
        state.generator.clone(),
        export_id,
        request,
    );

    Json(ExportResponse {
        status: "processing",
        export_id,
        file_url: None,
        metadata,
    })
}
