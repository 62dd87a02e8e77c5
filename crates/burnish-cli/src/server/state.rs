//! Application state for the web server.

use std::sync::Arc;

use burnish::Cleaner;

use crate::generate::TextGenerator;
use crate::jobs::JobStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The cleaning engine. Stateless, shared across requests.
    pub cleaner: Arc<Cleaner>,
    /// In-memory job records and event stream.
    pub jobs: JobStore,
    /// Optional text generator backing custom exports.
    /// If None, custom exports fail with a job error.
    pub generator: Option<Arc<dyn TextGenerator>>,
}

impl AppState {
    /// Create new application state.
    pub fn new(generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self {
            cleaner: Arc::new(Cleaner::new()),
            jobs: JobStore::new(),
            generator,
        }
    }

    /// Check if text generation is available.
    pub fn has_generator(&self) -> bool {
        self.generator.is_some()
    }
}
