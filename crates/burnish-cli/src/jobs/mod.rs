//! Asynchronous job subsystem: in-memory store plus artifact builders.
//!
//! Submitting a job inserts a `Processing` record and spawns a worker on
//! the shared runtime; the worker marks the record completed or failed
//! and publishes an event. Callers poll `GET /v1/jobs/{id}` for the
//! outcome; in-process consumers can subscribe to the event channel.

mod artifact;
mod store;

pub use artifact::{
    ExportArtifact, ExportError, ExportRequest, ExportType, LayoutRequest, LayoutType,
    build_export, layout_manifest,
};
pub use store::{JobEvent, JobKind, JobRecord, JobStatus, JobStore};

use std::sync::Arc;

use serde_json::json;
use uuid::Uuid;

use crate::generate::TextGenerator;

/// Spawn the worker for a submitted layout job.
///
/// Layout generation is a stub: it produces a textual manifest instead of
/// rendered image bytes, but runs through the full job lifecycle.
pub fn spawn_layout_job(store: JobStore, id: Uuid, request: LayoutRequest) {
    tokio::spawn(async move {
        let manifest = layout_manifest(id, &request);
        let sha256 = artifact::digest(&manifest);
        tracing::info!(job_id = %id, layout_type = %request.layout_type, "layout job completed");
        store
            .complete(
                id,
                json!({
                    "generation_id": id,
                    "layout_type": request.layout_type,
                    "language": request.language,
                    "content_type": "text/plain",
                    "manifest": manifest,
                    "sha256": sha256,
                }),
            )
            .await;
    });
}

/// Spawn the worker for a submitted export job.
pub fn spawn_export_job(
    store: JobStore,
    generator: Option<Arc<dyn TextGenerator>>,
    id: Uuid,
    request: ExportRequest,
) {
    tokio::spawn(async move {
        match build_export(&request, generator.as_deref()) {
            Ok(artifact) => {
                tracing::info!(
                    job_id = %id,
                    export_type = %request.export_type,
                    size_bytes = artifact.size_bytes,
                    "export job completed"
                );
                store
                    .complete(
                        id,
                        serde_json::to_value(&artifact)
                            .expect("export artifact serializes to JSON"),
                    )
                    .await;
            }
            Err(e) => {
                tracing::warn!(job_id = %id, error = %e, "export job failed");
                store.fail(id, e.to_string()).await;
            }
        }
    });
}
