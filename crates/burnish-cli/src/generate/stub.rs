//! Deterministic stub generator.

use super::provider::{GeneratorError, TextGenerator};

/// Text generator that returns predictable canned output.
///
/// Useful for development and tests: the output depends only on the
/// prompt, so export artifacts built from it are reproducible.
pub struct StubGenerator;

impl StubGenerator {
    /// Create a new stub generator.
    pub fn new() -> Self {
        Self
    }
}

impl Default for StubGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TextGenerator for StubGenerator {
    fn name(&self) -> &str {
        "stub"
    }

    fn models(&self) -> Vec<String> {
        vec!["burnish-stub-1".to_string()]
    }

    fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
        Ok(format!(
            "Generated export ({} prompt characters):\n{}",
            prompt.len(),
            prompt
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_is_deterministic() {
        let generator = StubGenerator::new();
        let a = generator.generate("list all skus").unwrap();
        let b = generator.generate("list all skus").unwrap();
        assert_eq!(a, b);
        assert!(a.contains("list all skus"));
    }

    #[test]
    fn test_stub_reports_identity() {
        let generator = StubGenerator::new();
        assert_eq!(generator.name(), "stub");
        assert_eq!(generator.models(), ["burnish-stub-1"]);
    }
}
