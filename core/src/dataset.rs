//! Row and dataset data structures.
//!
//! The engine consumes already-tabular data: every cell value is a string,
//! the empty string denotes a blank cell, and a column absent from a row's
//! mapping means that column is missing from the row's schema. The
//! comparison policy normalizes absent and blank to the same thing
//! ([`Row::value`]), but the distinction is preserved internally
//! ([`Row::get`]) so a misspelled column name does not silently read as a
//! column full of blanks.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A single record of column -> string cell data.
///
/// All values are strings; numeric/date semantics are derived by the
/// classifier, never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    cells: FxHashMap<String, String>,
}

impl Row {
    pub fn new() -> Row {
        Row::default()
    }

    /// Builds a row from `(column, value)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Row
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut row = Row::new();
        for (column, value) in pairs {
            row.set(column, value);
        }
        row
    }

    /// Sets a cell. An empty string records a blank cell, which is distinct
    /// from never setting the column at all.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(column.into(), value.into());
    }

    /// The normalized cell value: an absent column reads as the empty string.
    pub fn value(&self, column: &str) -> &str {
        self.cells.get(column).map(String::as_str).unwrap_or("")
    }

    /// The raw cell value, distinguishing an absent column (`None`) from a
    /// blank cell (`Some("")`).
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.cells.contains_key(column)
    }

    /// Column names present in this row, in no particular order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// An ordered sequence of rows plus the header list declared by the source.
///
/// Row order is the only dimension sorting touches; sorting produces a new
/// `Dataset` and never mutates the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn new(headers: Vec<String>) -> Dataset {
        Dataset {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns a copy of this dataset with rows reordered by `cmp`.
    ///
    /// Stable: rows that compare equal keep their relative input order. An
    /// empty sort specification therefore yields an order-preserving copy.
    pub fn sorted(&self, cmp: &crate::sort::RowComparator) -> Dataset {
        Dataset {
            headers: self.headers.clone(),
            rows: crate::sort::sort_rows(&self.rows, cmp),
        }
    }
}

/// The union of both datasets' header lists, in first-seen order.
///
/// This is the column universe presentation layers iterate when rendering a
/// diff: left headers first, then any right-only headers in their declared
/// order.
pub fn unified_headers(a: &Dataset, b: &Dataset) -> Vec<String> {
    let mut headers = a.headers.clone();
    for header in &b.headers {
        if !headers.contains(header) {
            headers.push(header.clone());
        }
    }
    headers
}
