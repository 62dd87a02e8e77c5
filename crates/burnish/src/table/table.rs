//! Ordered sequence of records.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;

use super::Record;

/// An ordered sequence of records with a stable column order.
///
/// Column order is first-encounter order: records in input order, then
/// fields in each record's own order. The cleaning passes iterate columns
/// in this order, which makes suggestion order deterministic.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Table {
    records: Vec<Record>,
    #[serde(skip)]
    columns: Vec<String>,
}

impl Table {
    /// Build a table from raw JSON objects, classifying every field value.
    ///
    /// Fails atomically on the first value that is not a string, number,
    /// or null; no partially classified table is ever returned.
    pub fn from_json(objects: &[Map<String, Value>]) -> Result<Self> {
        let records = objects
            .iter()
            .enumerate()
            .map(|(row, object)| Record::from_json(row, object))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_records(records))
    }

    /// Build a table from already-classified records.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for record in &records {
            for (name, _) in record.fields() {
                if !columns.iter().any(|c| c == name) {
                    columns.push(name.to_string());
                }
            }
        }
        Self { records, columns }
    }

    /// Column names in first-encounter order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Records in table order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Mutable access to records, for the cleaning passes.
    pub(crate) fn records_mut(&mut self) -> &mut Vec<Record> {
        &mut self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn objects(value: Value) -> Vec<Map<String, Value>> {
        value
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_object().unwrap().clone())
            .collect()
    }

    #[test]
    fn test_column_order_is_first_encounter() {
        let table = Table::from_json(&objects(json!([
            {"sku": "A", "name": "Pad"},
            {"name": "Disc", "price": 20.0, "sku": "B"},
        ])))
        .unwrap();
        assert_eq!(table.columns(), ["sku", "name", "price"]);
    }

    #[test]
    fn test_empty_table() {
        let table = Table::from_json(&[]).unwrap();
        assert!(table.is_empty());
        assert!(table.columns().is_empty());
    }

    #[test]
    fn test_classification_failure_is_atomic() {
        let result = Table::from_json(&objects(json!([
            {"sku": "A"},
            {"sku": "B", "tags": ["x", "y"]},
        ])));
        assert!(result.is_err());
    }
}
