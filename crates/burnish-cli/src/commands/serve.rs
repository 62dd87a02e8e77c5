//! Serve command - run the HTTP service.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::cli::GeneratorChoice;
use crate::generate::{StubGenerator, TextGenerator};
use crate::server::{app, state::AppState};

pub fn run(
    host: String,
    port: u16,
    generator: GeneratorChoice,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let generator: Option<Arc<dyn TextGenerator>> = match generator {
        GeneratorChoice::Stub => Some(Arc::new(StubGenerator::new())),
        GeneratorChoice::Off => None,
    };

    let state = AppState::new(generator);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(app::run_server(state, &host, port))?;

    Ok(())
}
