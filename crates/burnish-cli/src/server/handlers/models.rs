//! Generation backend status handler.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::server::state::AppState;

/// Response for the models status endpoint.
#[derive(Serialize)]
pub struct ModelStatusResponse {
    pub text_generation: TextGenerationStatus,
    pub layout_rendering: LayoutRenderingStatus,
}

#[derive(Serialize)]
pub struct TextGenerationStatus {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    pub models: Vec<String>,
}

#[derive(Serialize)]
pub struct LayoutRenderingStatus {
    pub available: bool,
    pub engines: Vec<&'static str>,
}

/// Report which generation backends are configured.
pub async fn model_status(State(state): State<AppState>) -> Json<ModelStatusResponse> {
    let text_generation = match &state.generator {
        Some(generator) => TextGenerationStatus {
            available: true,
            provider: Some(generator.name().to_string()),
            models: generator.models(),
        },
        None => TextGenerationStatus {
            available: false,
            provider: None,
            models: Vec::new(),
        },
    };

    Json(ModelStatusResponse {
        text_generation,
        layout_rendering: LayoutRenderingStatus {
            available: true,
            engines: vec!["manifest-stub"],
        },
    })
}
