//! Positional dataset diffing.
//!
//! Both inputs are assumed already ordered under the same sort
//! specification; rows are paired strictly by index. Schema divergence is
//! handled structurally: row equality takes the union of both rows' columns
//! and treats an absent column as the empty string, so datasets with
//! different column sets diff without error. Length divergence surfaces as
//! one-sided [`DiffRecord`]s rather than an error.
//!
//! When the chosen sort key does not fully discriminate rows, duplicate
//! groups that arrive in different orders can produce diffs for logically
//! identical rows. That is an accepted limitation of positional pairing;
//! the engine deliberately does not attempt key-based re-alignment.

use serde::{Deserialize, Serialize};

use crate::dataset::{unified_headers, Dataset, Row};

/// The outcome of comparing two datasets at one row position.
///
/// `index` is the zero-based position in the post-sort sequences. A side is
/// `None` when that dataset has no row at the position, which signals a
/// missing/extra row rather than a value mismatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffRecord {
    pub index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Row>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Row>,
}

impl DiffRecord {
    /// True when one dataset ran out of rows at this position.
    pub fn is_presence_mismatch(&self) -> bool {
        self.left.is_none() || self.right.is_none()
    }

    /// Union of the declared headers and any columns this record's rows
    /// carry beyond them: headers first in their given order, then the
    /// extras in sorted order.
    ///
    /// Consumers computing per-cell significance must walk this union, not
    /// the headers alone, so a differing cell in an undeclared column is
    /// never overlooked.
    pub fn column_union(&self, headers: &[String]) -> Vec<String> {
        let mut columns = headers.to_vec();
        let mut extras: Vec<&str> = self
            .left
            .iter()
            .chain(self.right.iter())
            .flat_map(|row| row.columns())
            .filter(|c| !headers.iter().any(|h| h == c))
            .collect();
        extras.sort_unstable();
        extras.dedup();
        columns.extend(extras.into_iter().map(str::to_string));
        columns
    }
}

/// A versioned diff report: the unified header list plus every differing
/// row position, in ascending index order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffReport {
    /// Schema version (currently "1").
    pub version: String,
    /// Union of both datasets' headers, first-seen order.
    pub headers: Vec<String>,
    pub records: Vec<DiffRecord>,
}

impl DiffReport {
    pub const SCHEMA_VERSION: &'static str = "1";

    pub fn new(headers: Vec<String>, records: Vec<DiffRecord>) -> DiffReport {
        DiffReport {
            version: Self::SCHEMA_VERSION.to_string(),
            headers,
            records,
        }
    }

    /// True iff the two datasets compared equal.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Structural row equality: every column present in either row holds the
/// same value on both sides, with absent columns reading as the empty
/// string. Independent of column order.
pub fn rows_match(a: &Row, b: &Row) -> bool {
    a.columns().all(|c| a.value(c) == b.value(c))
        && b.columns().all(|c| a.value(c) == b.value(c))
}

/// True iff lengths match and every position matches under [`rows_match`].
///
/// Agrees with [`diff_rows`]: `datasets_equal(a, b)` iff
/// `diff_rows(a, b).is_empty()`.
pub fn datasets_equal(a: &[Row], b: &[Row]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| rows_match(x, y))
}

/// Positional diff of two row sequences.
///
/// Walks positions `0..max(len)`. One-sided records mark length divergence;
/// two-sided records carry both rows whenever any union column differs.
/// Matching positions emit nothing.
pub fn diff_rows(a: &[Row], b: &[Row]) -> Vec<DiffRecord> {
    let mut records = Vec::new();
    for index in 0..a.len().max(b.len()) {
        match (a.get(index), b.get(index)) {
            (Some(left), Some(right)) => {
                if !rows_match(left, right) {
                    records.push(DiffRecord {
                        index,
                        left: Some(left.clone()),
                        right: Some(right.clone()),
                    });
                }
            }
            (Some(left), None) => records.push(DiffRecord {
                index,
                left: Some(left.clone()),
                right: None,
            }),
            (None, Some(right)) => records.push(DiffRecord {
                index,
                left: None,
                right: Some(right.clone()),
            }),
            (None, None) => {}
        }
    }
    records
}

/// Diffs two datasets and wraps the result with their unified header list.
pub fn diff_datasets(a: &Dataset, b: &Dataset) -> DiffReport {
    DiffReport::new(unified_headers(a, b), diff_rows(&a.rows, &b.rows))
}
