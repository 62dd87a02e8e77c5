//! Health check handler.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::server::state::AppState;

/// Response for the health endpoint.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub services: ServiceFlags,
}

/// Capability flags for the configured backends.
#[derive(Serialize)]
pub struct ServiceFlags {
    pub text_generation: bool,
    pub layout_rendering: bool,
}

/// Report service health and configured capabilities.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
        services: ServiceFlags {
            text_generation: state.has_generator(),
            // The manifest stub is always available.
            layout_rendering: true,
        },
    })
}
