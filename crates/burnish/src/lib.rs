//! Burnish: heuristic normalization engine for tabular product data.
//!
//! Burnish applies a fixed sequence of cleaning passes to an ordered table
//! of untyped product records and reports every change it made as a
//! structured audit trail.
//!
//! # Core Principles
//!
//! - **Deterministic**: the same input always produces the same output and
//!   the same suggestion sequence
//! - **Non-destructive**: the caller's table is never modified
//! - **Fully audited**: every rule that changed at least one row emits a
//!   suggestion; a second run over cleaned output emits none
//!
//! # Example
//!
//! ```
//! use burnish::{Cleaner, Table};
//! use serde_json::json;
//!
//! let rows = vec![json!({"size": "10mm", "weight": -5.2})];
//! let objects: Vec<_> = rows.iter().map(|r| r.as_object().unwrap().clone()).collect();
//!
//! let table = Table::from_json(&objects).unwrap();
//! let report = Cleaner::new().clean(&table, None).unwrap();
//!
//! assert_eq!(report.errors_found, report.suggestions.len());
//! ```

pub mod cleaner;
pub mod error;
pub mod report;
pub mod rules;
pub mod suggestion;
pub mod table;

pub use cleaner::Cleaner;
pub use error::{BurnishError, Result};
pub use report::{CleaningReport, ReportStatus};
pub use rules::{NON_NEGATIVE_COLUMNS, RuleConfig, TYPO_CORRECTIONS, UNIT_MAPPINGS};
pub use suggestion::{Suggestion, SuggestionKind};
pub use table::{FieldValue, Record, Table};
