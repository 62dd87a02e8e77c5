//! Property-based tests for the cleaning engine.
//!
//! These tests use proptest to generate random tables and verify that the
//! engine maintains its invariants under all conditions.
//!
//! # Testing Philosophy
//!
//! Property-based tests verify:
//! 1. **No panics**: cleaning never crashes on any classifiable input
//! 2. **Determinism**: same input always produces same output
//! 3. **Invariants**: core report properties always hold
//! 4. **Idempotence**: cleaning already-cleaned output changes nothing
//!
//! # Running Property Tests
//!
//! ```bash
//! # Run all property tests
//! cargo test -p burnish --test property_tests
//!
//! # Run with more cases (slower but more thorough)
//! PROPTEST_CASES=10000 cargo test -p burnish --test property_tests
//! ```

use proptest::prelude::*;

use burnish::{Cleaner, FieldValue, Record, Table};

// =============================================================================
// Test Strategies
// =============================================================================

/// Text fragments biased toward the patterns the rules act on.
fn cell_text() -> impl Strategy<Value = String> {
    prop_oneof![
        // Plain words
        "[a-zA-Z ]{0,20}",
        // Quantity with a unit abbreviation, spaced or adjoined
        "[0-9]{1,3} ?(mm|cm|m|kg|g|l|ml)",
        // Known misspellings in mixed case
        "(lenght|widht|heigt|weigth|colour|aluminium|Lenght|Colour)( [0-9]{1,2})?",
        // Unit-like tokens that must not match
        "[0-9]{1,3}(mmHg|mm2|gm)",
        // Arbitrary printable noise
        "[ -~]{0,30}",
    ]
}

fn cell_value() -> impl Strategy<Value = FieldValue> {
    prop_oneof![
        cell_text().prop_map(FieldValue::Text),
        (-1000.0f64..1000.0).prop_map(FieldValue::Number),
        Just(FieldValue::Null),
    ]
}

/// Column names drawn from the sign-rule set plus neutral names.
fn column_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("weight".to_string()),
        Just("price".to_string()),
        Just("length".to_string()),
        Just("quantity".to_string()),
        Just("size".to_string()),
        Just("desc".to_string()),
        "[a-z]{1,8}",
    ]
}

/// Generate a sparse table of up to 12 records.
fn arb_table() -> impl Strategy<Value = Table> {
    prop::collection::vec(
        prop::collection::vec((column_name(), cell_value()), 0..6),
        0..12,
    )
    .prop_map(|rows| {
        let records = rows
            .into_iter()
            .map(|fields| {
                let mut record = Record::new();
                for (name, value) in fields {
                    record.insert(name, value);
                }
                record
            })
            .collect();
        Table::from_records(records)
    })
}

// =============================================================================
// Engine Invariants
// =============================================================================

proptest! {
    /// Cleaning never panics and always reports a consistent summary.
    #[test]
    fn prop_report_invariants(table in arb_table()) {
        let report = Cleaner::new().clean(&table, None).unwrap();

        prop_assert_eq!(report.original_count, table.len());
        prop_assert!(report.cleaned_count <= report.original_count);
        prop_assert_eq!(report.errors_found, report.suggestions.len());
        prop_assert!(report.suggestions.iter().all(|s| s.affected_rows > 0));
    }

    /// Row count shrinks exactly when duplicates existed.
    #[test]
    fn prop_row_count_monotonicity(table in arb_table()) {
        let report = Cleaner::new().clean(&table, None).unwrap();

        let removed_dupes = report
            .suggestions
            .iter()
            .find(|s| s.column == "all")
            .map(|s| s.affected_rows)
            .unwrap_or(0);
        prop_assert_eq!(report.original_count - report.cleaned_count, removed_dupes);
    }

    /// Same input always produces the same report.
    #[test]
    fn prop_deterministic(table in arb_table()) {
        let cleaner = Cleaner::new();
        let first = cleaner.clean(&table, None).unwrap();
        let second = cleaner.clean(&table, None).unwrap();

        prop_assert_eq!(&first.suggestions, &second.suggestions);
        prop_assert_eq!(
            serde_json::to_value(&first.cleaned_data).unwrap(),
            serde_json::to_value(&second.cleaned_data).unwrap()
        );
    }

    /// The built-in rule set cannot reintroduce its own trigger patterns,
    /// so a second run over cleaned output emits no suggestions.
    #[test]
    fn prop_idempotent(table in arb_table()) {
        let cleaner = Cleaner::new();
        let first = cleaner.clean(&table, None).unwrap();
        let second = cleaner.clean(&first.cleaned_data, None).unwrap();

        prop_assert!(second.suggestions.is_empty(), "second run emitted: {:?}", second.suggestions);
        prop_assert_eq!(second.cleaned_count, first.cleaned_count);
    }

    /// The caller's table is never mutated.
    #[test]
    fn prop_input_untouched(table in arb_table()) {
        let before = serde_json::to_value(&table).unwrap();
        let _ = Cleaner::new().clean(&table, None).unwrap();
        let after = serde_json::to_value(&table).unwrap();

        prop_assert_eq!(before, after);
    }

    /// Cleaned output contains no record that duplicates an earlier one.
    #[test]
    fn prop_no_duplicates_survive(table in arb_table()) {
        let report = Cleaner::new().clean(&table, None).unwrap();

        let records = report.cleaned_data.records();
        for (i, a) in records.iter().enumerate() {
            for b in &records[i + 1..] {
                prop_assert_ne!(a, b);
            }
        }
    }
}
