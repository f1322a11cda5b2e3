//! Diff suppression and effective-diff computation.
//!
//! A [`DiffKey`] addresses one cell-level comparison outcome. Users toggle
//! keys into a [`SuppressionSet`] to mark individual diffs as accepted; the
//! set is consulted when computing the "effective" diff set that
//! presentation and export layers consume.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cell_type::classify;
use crate::diff::{DiffRecord, DiffReport};

/// `(row index, column name)` address of one comparable cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiffKey {
    pub row: usize,
    pub column: String,
}

impl DiffKey {
    pub fn new(row: usize, column: impl Into<String>) -> DiffKey {
        DiffKey {
            row,
            column: column.into(),
        }
    }
}

/// True when two normalized cell values count as a difference.
///
/// The value comparison always applies; a type mismatch is an additional
/// trigger when `type_check_enabled` is set, never a replacement. Two
/// values that differ as strings stay significant even when both classify
/// to the same type.
pub fn cell_significant(left: &str, right: &str, type_check_enabled: bool) -> bool {
    left != right || (type_check_enabled && cell_type_mismatch(left, right))
}

/// True when the two values classify to different cell types.
pub fn cell_type_mismatch(left: &str, right: &str) -> bool {
    classify(left) != classify(right)
}

/// A diff record that survived suppression filtering, annotated with the
/// columns that remain significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectiveDiff {
    pub record: DiffRecord,
    /// Significant columns in column-union order (declared headers first,
    /// then any undeclared row columns). For a row-presence mismatch this
    /// lists every column of the present side.
    pub significant_columns: Vec<String>,
}

/// The set of user-accepted diff keys for one comparison context.
///
/// Purely in-memory. Lifecycle: empty at load, mutated only by [`toggle`],
/// cleared atomically whenever either source dataset is reloaded (row
/// indices and content change, invalidating prior decisions).
///
/// [`toggle`]: SuppressionSet::toggle
#[derive(Debug, Clone, Default)]
pub struct SuppressionSet {
    keys: FxHashSet<DiffKey>,
}

impl SuppressionSet {
    pub fn new() -> SuppressionSet {
        SuppressionSet::default()
    }

    /// Idempotent flip: a present key is removed, an absent key is added.
    pub fn toggle(&mut self, key: DiffKey) {
        if !self.keys.remove(&key) {
            self.keys.insert(key);
        }
    }

    pub fn is_suppressed(&self, key: &DiffKey) -> bool {
        self.keys.contains(key)
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Filters a report down to the records that still matter.
    ///
    /// A record is included iff it has at least one significant,
    /// unsuppressed cell, or it is a row-presence mismatch. Presence
    /// mismatches are never suppressible.
    pub fn effective_diffs(
        &self,
        report: &DiffReport,
        type_check_enabled: bool,
    ) -> Vec<EffectiveDiff> {
        let mut effective = Vec::new();
        for record in &report.records {
            let columns = record.column_union(&report.headers);

            if record.is_presence_mismatch() {
                let present = record.left.as_ref().or(record.right.as_ref());
                let significant_columns = columns
                    .into_iter()
                    .filter(|c| present.is_some_and(|row| row.has_column(c)))
                    .collect();
                effective.push(EffectiveDiff {
                    record: record.clone(),
                    significant_columns,
                });
                continue;
            }

            let (Some(left), Some(right)) = (&record.left, &record.right) else {
                continue;
            };
            let mut significant_columns = Vec::new();
            for column in &columns {
                if self.is_suppressed(&DiffKey::new(record.index, column.clone())) {
                    continue;
                }
                if cell_significant(left.value(column), right.value(column), type_check_enabled) {
                    significant_columns.push(column.clone());
                }
            }
            if !significant_columns.is_empty() {
                effective.push(EffectiveDiff {
                    record: record.clone(),
                    significant_columns,
                });
            }
        }
        effective
    }
}
