//! Tagged field values.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{BurnishError, Result};

/// A single cell value in a record.
///
/// Every field is classified exactly once, when the [`Table`](super::Table)
/// is constructed. There is no silent coercion: a value that is neither a
/// string, a number, nor null is a validation error, not a text cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Free-form text.
    Text(String),
    /// A finite numeric value.
    Number(f64),
    /// Explicit null or absent field.
    Null,
}

impl FieldValue {
    /// Classify a raw JSON value into a tagged field value.
    ///
    /// `row` and `field` locate the value in the input for error reporting.
    pub fn classify(row: usize, field: &str, value: &Value) -> Result<Self> {
        match value {
            Value::Null => Ok(FieldValue::Null),
            Value::String(s) => Ok(FieldValue::Text(s.clone())),
            Value::Number(n) => n.as_f64().map(FieldValue::Number).ok_or_else(|| {
                BurnishError::Validation {
                    row,
                    field: field.to_string(),
                    found: format!("number {n} outside f64 range"),
                }
            }),
            Value::Bool(_) => Err(Self::unclassifiable(row, field, "boolean")),
            Value::Array(_) => Err(Self::unclassifiable(row, field, "array")),
            Value::Object(_) => Err(Self::unclassifiable(row, field, "object")),
        }
    }

    fn unclassifiable(row: usize, field: &str, found: &str) -> BurnishError {
        BurnishError::Validation {
            row,
            field: field.to_string(),
            found: found.to_string(),
        }
    }

    /// Check whether this value is null/absent.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Get the text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the numeric content, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}
