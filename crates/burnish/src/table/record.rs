//! A single product record.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::Result;

use super::FieldValue;

/// An ordered mapping from field name to value.
///
/// Field sets are not required to be uniform across records; a sparse table
/// is valid input. Field order is preserved for output, but equality (used
/// by deduplication) is order-independent and treats a missing field the
/// same as an explicit null.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, FieldValue>,
}

/// A field value reduced to a hashable form for duplicate detection.
///
/// Numbers compare by bit pattern with negative zero folded into zero, so
/// exact numeric equality matches `f64` equality for every value the engine
/// can produce.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) enum KeyValue {
    Text(String),
    Number(u64),
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record from a raw JSON object, classifying each field.
    ///
    /// `row` is the record's position in the input, used in error messages.
    pub fn from_json(row: usize, object: &Map<String, Value>) -> Result<Self> {
        let mut fields = IndexMap::with_capacity(object.len());
        for (name, value) in object {
            fields.insert(name.clone(), FieldValue::classify(row, name, value)?);
        }
        Ok(Self { fields })
    }

    /// Set a field value, preserving insertion order for new fields.
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    /// Get a field value by name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Iterate over fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of fields in this record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether this record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Canonical key for duplicate detection.
    ///
    /// Null-valued fields are skipped, which makes a missing field equal to
    /// an explicit null, and the remaining fields are sorted by name so
    /// field order never affects equality.
    pub(crate) fn dedup_key(&self) -> Vec<(String, KeyValue)> {
        let mut key: Vec<(String, KeyValue)> = self
            .fields
            .iter()
            .filter_map(|(name, value)| match value {
                FieldValue::Text(s) => Some((name.clone(), KeyValue::Text(s.clone()))),
                FieldValue::Number(n) => {
                    let bits = if *n == 0.0 { 0 } else { n.to_bits() };
                    Some((name.clone(), KeyValue::Number(bits)))
                }
                FieldValue::Null => None,
            })
            .collect();
        key.sort();
        key
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.dedup_key() == other.dedup_key()
    }
}
