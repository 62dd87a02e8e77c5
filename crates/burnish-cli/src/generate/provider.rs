//! Text generator trait.

use thiserror::Error;

/// Error from a text generation backend.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The backend rejected or failed the request.
    #[error("generation failed: {0}")]
    Failed(String),
}

/// Trait for text generation backends.
///
/// This is the seam where a real AI provider would plug in; the service
/// ships only the deterministic [`StubGenerator`](super::StubGenerator)
/// and stays provider-agnostic. Implementations must be thread-safe
/// (Send + Sync) because workers run on the shared runtime.
pub trait TextGenerator: Send + Sync {
    /// Name of this backend (for status reporting and logging).
    fn name(&self) -> &str;

    /// Models this backend can serve.
    fn models(&self) -> Vec<String>;

    /// Generate text for a prompt.
    fn generate(&self, prompt: &str) -> Result<String, GeneratorError>;
}
