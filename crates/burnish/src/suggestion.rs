//! Audit trail entries for applied cleaning rules.

use serde::{Deserialize, Serialize};

/// Kind of cleaning rule that produced a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    /// Unit abbreviation expanded to its full word.
    UnitStandardization,
    /// Known misspelling corrected.
    TypoCorrection,
    /// Negative value in a non-negative column flipped to positive.
    NegativeValueFix,
    /// Fully identical records collapsed to one.
    DuplicateRemoval,
}

impl SuggestionKind {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            SuggestionKind::UnitStandardization => "Unit Standardization",
            SuggestionKind::TypoCorrection => "Typo Correction",
            SuggestionKind::NegativeValueFix => "Negative Value Fix",
            SuggestionKind::DuplicateRemoval => "Duplicate Removal",
        }
    }
}

/// One audit entry, emitted per (rule, column) pair that changed at least
/// one row. Accumulation order is the pass order (units, typos, sign,
/// dedup) and is an observable contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Kind of rule applied.
    #[serde(rename = "type")]
    pub kind: SuggestionKind,

    /// Affected column, or "all" for deduplication.
    pub column: String,

    /// Human-readable description of the change.
    pub change: String,

    /// Number of rows the rule changed. Never zero.
    pub affected_rows: usize,
}

impl Suggestion {
    /// Unit standardization entry for one (abbreviation, column) pair.
    pub fn unit(column: &str, abbr: &str, full: &str, affected_rows: usize) -> Self {
        Self {
            kind: SuggestionKind::UnitStandardization,
            column: column.to_string(),
            change: format!("Standardized '{abbr}' to '{full}'"),
            affected_rows,
        }
    }

    /// Typo correction entry for one (misspelling, column) pair.
    pub fn typo(column: &str, typo: &str, correct: &str, affected_rows: usize) -> Self {
        Self {
            kind: SuggestionKind::TypoCorrection,
            column: column.to_string(),
            change: format!("Fixed typo '{typo}' to '{correct}'"),
            affected_rows,
        }
    }

    /// Negative-value fix entry for one column.
    pub fn negative_fix(column: &str, affected_rows: usize) -> Self {
        Self {
            kind: SuggestionKind::NegativeValueFix,
            column: column.to_string(),
            change: "Converted negative values to positive".to_string(),
            affected_rows,
        }
    }

    /// Deduplication entry; always spans all columns.
    pub fn duplicate_removal(removed: usize) -> Self {
        Self {
            kind: SuggestionKind::DuplicateRemoval,
            column: "all".to_string(),
            change: format!("Removed {removed} duplicate rows"),
            affected_rows: removed,
        }
    }
}
