//! Data cleaning handler.

use axum::{Json, extract::State};
use burnish::{CleaningReport, RuleConfig, Table};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Request body for `POST /v1/data/clean`.
#[derive(Deserialize)]
pub struct CleanRequest {
    /// Records to clean.
    pub data: Vec<Map<String, Value>>,
    /// Reserved for per-call rule overrides; accepted, currently inert.
    #[serde(default)]
    pub rules: Option<RuleConfig>,
    /// Accepted for interface stability; the built-in rules always apply.
    #[serde(default)]
    pub auto_approve: bool,
}

/// Clean a table of records and return the report.
pub async fn clean_data(
    State(state): State<AppState>,
    Json(request): Json<CleanRequest>,
) -> Result<Json<CleaningReport>, ApiError> {
    let _ = request.auto_approve;

    let table = Table::from_json(&request.data)?;
    let report = state.cleaner.clean(&table, request.rules.as_ref())?;

    tracing::info!(
        original = report.original_count,
        cleaned = report.cleaned_count,
        issues = report.errors_found,
        "cleaned table"
    );

    Ok(Json(report))
}
