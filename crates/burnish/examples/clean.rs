//! Minimal example: clean a small product table and print the audit trail.
//!
//! Run with: cargo run -p burnish --example clean

use burnish::{Cleaner, Table};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let rows = json!([
        {"sku": "BP-100", "size": "10mm", "desc": "Brake pad, aluminium", "weight": -0.4},
        {"sku": "BP-100", "size": "10mm", "desc": "Brake pad, aluminium", "weight": -0.4},
        {"sku": "OF-220", "size": "80 mm", "desc": "Oil filter, heigt 80", "weight": 0.3},
    ]);
    let objects: Vec<_> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r.as_object().unwrap().clone())
        .collect();

    let table = Table::from_json(&objects)?;
    let report = Cleaner::new().clean(&table, None)?;

    println!(
        "{} rows in, {} rows out, {} issues fixed",
        report.original_count, report.cleaned_count, report.errors_found
    );
    for suggestion in &report.suggestions {
        println!(
            "  [{}] {}: {} ({} rows)",
            suggestion.kind.label(),
            suggestion.column,
            suggestion.change,
            suggestion.affected_rows
        );
    }
    println!("{}", serde_json::to_string_pretty(&report.cleaned_data)?);

    Ok(())
}
