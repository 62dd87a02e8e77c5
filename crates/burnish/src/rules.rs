//! Built-in cleaning rules and the matching primitives behind them.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Unit abbreviations standardized to full words, in application order.
///
/// Order matters and is observable through suggestion order: "mm" runs
/// before "m", so "10 mm" never matches the bare-meter rule.
pub const UNIT_MAPPINGS: &[(&str, &str)] = &[
    ("mm", "Millimeter"),
    ("cm", "Zentimeter"),
    ("m", "Meter"),
    ("kg", "Kilogramm"),
    ("g", "Gramm"),
    ("l", "Liter"),
    ("ml", "Milliliter"),
];

/// Common misspellings corrected case-insensitively, in application order.
pub const TYPO_CORRECTIONS: &[(&str, &str)] = &[
    ("lenght", "length"),
    ("widht", "width"),
    ("heigt", "height"),
    ("weigth", "weight"),
    ("colour", "color"),
    ("aluminium", "aluminum"),
];

/// Columns whose values are semantically non-negative (exact name match).
pub const NON_NEGATIVE_COLUMNS: &[&str] = &["weight", "length", "width", "height", "price"];

/// Compiled case-insensitive patterns for the typo list.
pub(crate) static TYPO_PATTERNS: Lazy<Vec<(Regex, &str, &str)>> = Lazy::new(|| {
    TYPO_CORRECTIONS
        .iter()
        .map(|&(typo, correct)| {
            let pattern = Regex::new(&format!("(?i){}", regex::escape(typo)))
                .expect("typo pattern is a valid regex");
            (pattern, typo, correct)
        })
        .collect()
});

/// Per-call rule overrides.
///
/// Accepted by [`Cleaner::clean`](crate::Cleaner::clean) but currently
/// inert: the four built-in rule kinds always run, fully enabled. The
/// parameter is reserved for future per-call overrides and is kept in the
/// interface so callers that already pass a configuration keep working.
/// Arbitrary keys are tolerated and ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleConfig(pub Map<String, Value>);

/// Replace standalone occurrences of a unit abbreviation with its full word.
///
/// An occurrence is standalone when the preceding character is absent or
/// non-alphabetic (a digit may adjoin the unit, as in "10mm") and the
/// following character is absent or non-alphanumeric ("5mmHg" and "mm2" do
/// not match). When the abbreviation directly follows a digit the
/// replacement inserts a separating space, so "10mm" becomes
/// "10 Millimeter".
///
/// Returns `None` when nothing matched.
pub(crate) fn replace_unit_tokens(text: &str, abbr: &str, full: &str) -> Option<String> {
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    let mut replaced = false;

    while i < text.len() {
        if text[i..].starts_with(abbr) && is_standalone(text, i, abbr.len()) {
            if prev_char(text, i).is_some_and(|c| c.is_ascii_digit()) {
                out.push(' ');
            }
            out.push_str(full);
            i += abbr.len();
            replaced = true;
        } else {
            let ch = text[i..].chars().next().expect("index is a char boundary");
            out.push(ch);
            i += ch.len_utf8();
        }
    }

    replaced.then_some(out)
}

fn is_standalone(text: &str, start: usize, len: usize) -> bool {
    let before = prev_char(text, start);
    let after = text[start + len..].chars().next();
    !before.is_some_and(|c| c.is_alphabetic()) && !after.is_some_and(|c| c.is_alphanumeric())
}

fn prev_char(text: &str, index: usize) -> Option<char> {
    text[..index].chars().next_back()
}
