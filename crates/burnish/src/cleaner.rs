//! The normalization engine: four fixed cleaning passes over a table.

use std::collections::HashSet;

use crate::error::Result;
use crate::report::{CleaningReport, ReportStatus};
use crate::rules::{
    NON_NEGATIVE_COLUMNS, RuleConfig, TYPO_PATTERNS, UNIT_MAPPINGS, replace_unit_tokens,
};
use crate::suggestion::Suggestion;
use crate::table::{FieldValue, Table};

/// The cleaning engine.
///
/// Stateless and synchronous: every invocation works on its own copy of
/// the input table, so arbitrarily many concurrent `clean` calls are safe
/// without locking. The four passes run in a fixed order (units, typos,
/// numeric sign, dedup); a pass either fully completes over all rows or
/// the whole call fails with no output.
#[derive(Debug, Default)]
pub struct Cleaner;

impl Cleaner {
    /// Create a new cleaner.
    pub fn new() -> Self {
        Self
    }

    /// Clean a table, returning the cleaned copy and an audit trail.
    ///
    /// The input table is never mutated. `rules` is reserved for future
    /// per-call rule overrides and is currently inert; the built-in rule
    /// set always runs, fully enabled.
    pub fn clean(&self, table: &Table, rules: Option<&RuleConfig>) -> Result<CleaningReport> {
        let _ = rules;

        let original_count = table.len();
        let mut working = table.clone();
        let mut suggestions = Vec::new();

        self.standardize_units(&mut working, &mut suggestions);
        self.correct_typos(&mut working, &mut suggestions);
        self.fix_negative_values(&mut working, &mut suggestions);
        self.remove_duplicates(&mut working, &mut suggestions);

        Ok(CleaningReport {
            status: ReportStatus::Completed,
            original_count,
            cleaned_count: working.len(),
            errors_found: suggestions.len(),
            suggestions,
            cleaned_data: working,
        })
    }

    /// Pass 1: expand unit abbreviations to full words in text cells.
    ///
    /// Columns form the outer loop (first-encounter order) and the fixed
    /// abbreviation list the inner loop, so suggestion order is stable.
    /// Replacements land in the working table as they are found, which
    /// keeps later pairs from re-matching earlier pairs' output ("mm"
    /// becomes "Millimeter" before the bare "m" rule runs).
    fn standardize_units(&self, table: &mut Table, suggestions: &mut Vec<Suggestion>) {
        for column in table.columns().to_vec() {
            for (abbr, full) in UNIT_MAPPINGS {
                let mut affected = 0;
                for record in table.records_mut() {
                    let Some(FieldValue::Text(text)) = record.get(&column) else {
                        continue;
                    };
                    if let Some(updated) = replace_unit_tokens(text, abbr, full) {
                        record.insert(column.clone(), FieldValue::Text(updated));
                        affected += 1;
                    }
                }
                if affected > 0 {
                    suggestions.push(Suggestion::unit(&column, abbr, full, affected));
                }
            }
        }
    }

    /// Pass 2: fix known misspellings in text cells, case-insensitively.
    fn correct_typos(&self, table: &mut Table, suggestions: &mut Vec<Suggestion>) {
        for column in table.columns().to_vec() {
            for (pattern, typo, correct) in TYPO_PATTERNS.iter() {
                let mut affected = 0;
                for record in table.records_mut() {
                    let Some(FieldValue::Text(text)) = record.get(&column) else {
                        continue;
                    };
                    if pattern.is_match(text) {
                        let updated = pattern.replace_all(text, *correct).into_owned();
                        record.insert(column.clone(), FieldValue::Text(updated));
                        affected += 1;
                    }
                }
                if affected > 0 {
                    suggestions.push(Suggestion::typo(&column, typo, correct, affected));
                }
            }
        }
    }

    /// Pass 3: flip negative values to positive in the fixed set of
    /// semantically non-negative columns.
    ///
    /// A column qualifies only when its name matches exactly and every
    /// cell is numeric or null, with at least one number present. A single
    /// text cell disqualifies the whole column.
    fn fix_negative_values(&self, table: &mut Table, suggestions: &mut Vec<Suggestion>) {
        for column in table.columns().to_vec() {
            if !NON_NEGATIVE_COLUMNS.contains(&column.as_str()) {
                continue;
            }
            if !Self::is_numeric_column(table, &column) {
                continue;
            }

            let mut affected = 0;
            for record in table.records_mut() {
                let Some(FieldValue::Number(n)) = record.get(&column) else {
                    continue;
                };
                if *n < 0.0 {
                    let positive = n.abs();
                    record.insert(column.clone(), FieldValue::Number(positive));
                    affected += 1;
                }
            }
            if affected > 0 {
                suggestions.push(Suggestion::negative_fix(&column, affected));
            }
        }
    }

    /// Pass 4: collapse fully identical records, keeping first occurrences.
    fn remove_duplicates(&self, table: &mut Table, suggestions: &mut Vec<Suggestion>) {
        let before = table.len();
        let mut seen = HashSet::with_capacity(before);
        table.records_mut().retain(|record| seen.insert(record.dedup_key()));
        let removed = before - table.len();
        if removed > 0 {
            suggestions.push(Suggestion::duplicate_removal(removed));
        }
    }

    fn is_numeric_column(table: &Table, column: &str) -> bool {
        let mut any_number = false;
        for record in table.records() {
            match record.get(column) {
                Some(FieldValue::Number(_)) => any_number = true,
                Some(FieldValue::Text(_)) => return false,
                Some(FieldValue::Null) | None => {}
            }
        }
        any_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table(value: serde_json::Value) -> Table {
        let objects: Vec<_> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_object().unwrap().clone())
            .collect();
        Table::from_json(&objects).unwrap()
    }

    fn text<'a>(report: &'a CleaningReport, row: usize, field: &str) -> &'a str {
        report.cleaned_data.records()[row]
            .get(field)
            .and_then(FieldValue::as_text)
            .unwrap()
    }

    #[test]
    fn test_empty_table_produces_empty_report() {
        let report = Cleaner::new().clean(&Table::default(), None).unwrap();
        assert_eq!(report.original_count, 0);
        assert_eq!(report.cleaned_count, 0);
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_unit_standardization_counts_matching_rows() {
        let input = table(json!([
            {"size": "10mm"},
            {"size": "20 mm"},
            {"size": "unrelated"},
        ]));
        let report = Cleaner::new().clean(&input, None).unwrap();

        assert_eq!(text(&report, 0, "size"), "10 Millimeter");
        assert_eq!(text(&report, 1, "size"), "20 Millimeter");
        assert_eq!(report.suggestions.len(), 1);
        assert_eq!(report.suggestions[0].affected_rows, 2);
    }

    #[test]
    fn test_mm_expanded_before_bare_m() {
        let input = table(json!([{"size": "10 mm"}]));
        let report = Cleaner::new().clean(&input, None).unwrap();

        assert_eq!(text(&report, 0, "size"), "10 Millimeter");
        // Only the "mm" rule fires; "Millimeter" offers no standalone "m".
        assert_eq!(report.suggestions.len(), 1);
        assert_eq!(report.suggestions[0].change, "Standardized 'mm' to 'Millimeter'");
    }

    #[test]
    fn test_numeric_column_with_text_cell_is_skipped() {
        let input = table(json!([
            {"price": -5.0},
            {"price": "negotiable"},
        ]));
        let report = Cleaner::new().clean(&input, None).unwrap();

        assert_eq!(
            report.cleaned_data.records()[0].get("price"),
            Some(&FieldValue::Number(-5.0))
        );
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_all_null_column_emits_nothing() {
        let input = table(json!([{"weight": null}, {"weight": null}]));
        let report = Cleaner::new().clean(&input, None).unwrap();
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_dedup_keeps_first_occurrence_order() {
        let input = table(json!([
            {"sku": "A"},
            {"sku": "B"},
            {"sku": "A"},
            {"sku": "C"},
        ]));
        let report = Cleaner::new().clean(&input, None).unwrap();

        let skus: Vec<_> = report
            .cleaned_data
            .records()
            .iter()
            .map(|r| r.get("sku").and_then(FieldValue::as_text).unwrap().to_string())
            .collect();
        assert_eq!(skus, ["A", "B", "C"]);
        assert_eq!(report.cleaned_count, 3);
    }

    #[test]
    fn test_rule_config_is_accepted_and_inert() {
        let input = table(json!([{"size": "10mm"}]));
        let cleaner = Cleaner::new();
        let with_rules = cleaner
            .clean(&input, Some(&RuleConfig::default()))
            .unwrap();
        let without_rules = cleaner.clean(&input, None).unwrap();
        assert_eq!(with_rules.suggestions, without_rules.suggestions);
    }
}
