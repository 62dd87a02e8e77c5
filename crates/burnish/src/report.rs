//! Result of one cleaning invocation.

use serde::Serialize;

use crate::suggestion::Suggestion;
use crate::table::Table;

/// Terminal status of a cleaning call. Errors are reported through
/// [`BurnishError`](crate::BurnishError) instead, so a report always
/// carries `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Completed,
}

/// Structured outcome of [`Cleaner::clean`](crate::Cleaner::clean).
///
/// Invariants: `cleaned_count <= original_count`, and `errors_found`
/// always equals `suggestions.len()`.
#[derive(Debug, Clone, Serialize)]
pub struct CleaningReport {
    /// Always `completed` on success.
    pub status: ReportStatus,
    /// Records in the input table.
    pub original_count: usize,
    /// Records in the cleaned table.
    pub cleaned_count: usize,
    /// Number of issues corrected; equal to the suggestion count.
    pub errors_found: usize,
    /// Audit trail, in rule application order.
    pub suggestions: Vec<Suggestion>,
    /// The cleaned table.
    pub cleaned_data: Table,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(ReportStatus::Completed).unwrap(),
            serde_json::json!("completed")
        );
    }
}
