//! Cell type classification.
//!
//! [`classify`] maps any cell string to exactly one coarse semantic type.
//! The rules are ordered and strict; the first match wins:
//!
//! 1. Empty string -> [`CellType::Text`] (a blank cell, not absent data).
//! 2. `"true"` / `"false"` (ASCII case-insensitive) -> [`CellType::Boolean`].
//! 3. A full parse as a calendar date under one of the accepted formats ->
//!    [`CellType::Date`]. Accepted formats: `%Y-%m-%d` (`2024-03-01`),
//!    `%Y/%m/%d` (`2024/03/01`), `%d.%m.%Y` (`01.03.2024`). Partial parses
//!    and impossible dates such as `2024-02-30` are rejected.
//! 4. A full parse as a finite real number -> [`CellType::Number`]. Optional
//!    sign, optional fraction, scientific notation. Thousand separators,
//!    surrounding whitespace, infinities, and NaN are all rejected: an
//!    ambiguous value is not a number.
//! 5. Anything else -> [`CellType::Text`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Coarse semantic classification of a cell's textual value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellType {
    Number,
    Date,
    Boolean,
    Text,
}

/// Date formats recognized by rule 3, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y"];

/// Classifies a cell value. Total and deterministic: every input string maps
/// to exactly one [`CellType`].
pub fn classify(value: &str) -> CellType {
    if value.is_empty() {
        return CellType::Text;
    }
    if value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false") {
        return CellType::Boolean;
    }
    if DATE_FORMATS
        .iter()
        .any(|fmt| NaiveDate::parse_from_str(value, fmt).is_ok())
    {
        return CellType::Date;
    }
    if value.parse::<f64>().map(f64::is_finite).unwrap_or(false) {
        return CellType::Number;
    }
    CellType::Text
}
