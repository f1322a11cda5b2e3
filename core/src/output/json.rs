//! JSON serialization of diff reports for export and presentation layers.

use serde::Serialize;

use crate::diff::DiffReport;
use crate::suppress::EffectiveDiff;

/// One differing cell, flattened for export.
///
/// A `None` side means that dataset has no row at this position; `Some("")`
/// is a blank cell in a row that exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellDiff {
    pub row: usize,
    pub column: String,
    pub left: Option<String>,
    pub right: Option<String>,
}

pub fn serialize_diff_report(report: &DiffReport) -> serde_json::Result<String> {
    serde_json::to_string(report)
}

pub fn serialize_effective_diffs(diffs: &[EffectiveDiff]) -> serde_json::Result<String> {
    serde_json::to_string(diffs)
}

pub fn serialize_cell_diffs(diffs: &[CellDiff]) -> serde_json::Result<String> {
    serde_json::to_string(diffs)
}

/// Flattens every differing cell of a raw report, suppressions not applied.
///
/// Two-sided records contribute one entry per column-union column whose
/// normalized values differ; one-sided records contribute one entry per
/// column the present row actually has.
pub fn report_to_cell_diffs(report: &DiffReport) -> Vec<CellDiff> {
    let mut cells = Vec::new();
    for record in &report.records {
        let columns = record.column_union(&report.headers);
        match (&record.left, &record.right) {
            (Some(left), Some(right)) => {
                for column in &columns {
                    if left.value(column) != right.value(column) {
                        cells.push(CellDiff {
                            row: record.index,
                            column: column.clone(),
                            left: left.get(column).map(str::to_string),
                            right: right.get(column).map(str::to_string),
                        });
                    }
                }
            }
            (Some(row), None) | (None, Some(row)) => {
                for column in columns.iter().filter(|c| row.has_column(c)) {
                    cells.push(CellDiff {
                        row: record.index,
                        column: column.clone(),
                        left: record.left.as_ref().map(|r| r.value(column).to_string()),
                        right: record.right.as_ref().map(|r| r.value(column).to_string()),
                    });
                }
            }
            (None, None) => {}
        }
    }
    cells
}

/// Flattens the significant cells of an effective diff set.
pub fn effective_to_cell_diffs(diffs: &[EffectiveDiff]) -> Vec<CellDiff> {
    let mut cells = Vec::new();
    for diff in diffs {
        let record = &diff.record;
        for column in &diff.significant_columns {
            cells.push(CellDiff {
                row: record.index,
                column: column.clone(),
                left: record.left.as_ref().map(|r| r.value(column).to_string()),
                right: record.right.as_ref().map(|r| r.value(column).to_string()),
            });
        }
    }
    cells
}
