//! Error types for the Burnish library.

use thiserror::Error;

/// Main error type for Burnish operations.
///
/// The engine has no I/O and no external calls, so the only failure class
/// is malformed input: a field value that cannot be classified as text,
/// number, or null. Classification happens during [`Table`](crate::Table)
/// construction, before any cleaning pass runs, so a cleaning call either
/// fully completes or fails with no output.
#[derive(Debug, Error)]
pub enum BurnishError {
    /// A field value could not be classified into text/number/null.
    #[error("Validation error at row {row}, field '{field}': cannot classify {found} as text, number, or null")]
    Validation {
        row: usize,
        field: String,
        found: String,
    },
}

/// Result type alias for Burnish operations.
pub type Result<T> = std::result::Result<T, BurnishError>;
