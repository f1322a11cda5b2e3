//! Sheet Recon: a reconciliation engine for tabular datasets.
//!
//! This crate provides functionality for:
//! - Sorting datasets by a multi-key, locale-aware sort specification
//! - Comparing two sorted datasets positionally with per-cell diff records
//! - Classifying cell text into coarse semantic types
//! - Filtering diffs through a user-maintained suppression set
//!
//! The engine is a library boundary, not a file or network protocol: it
//! consumes already-tabular string data from a provider (CSV reader, sheet
//! export, ...) and hands structured diff reports to presentation layers.
//! All operations are synchronous and pure; the only stateful value is the
//! caller-owned [`ReconSession`].
//!
//! # Quick Start
//!
//! ```
//! use sheet_recon::{Dataset, ReconConfig, ReconSession, Row, SortCriterion, SortSpec};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut left = Dataset::new(vec!["Name".into(), "Qty".into()]);
//! left.push_row(Row::from_pairs([("Name", "bolt"), ("Qty", "10")]));
//! let mut right = Dataset::new(vec!["Name".into(), "Qty".into()]);
//! right.push_row(Row::from_pairs([("Name", "bolt"), ("Qty", "12")]));
//!
//! let mut session = ReconSession::new(ReconConfig::default())?;
//! session.load_left(left);
//! session.load_right(right);
//! session.set_sort_spec(SortSpec::new(vec![SortCriterion::ascending("Name")]));
//!
//! let report = session.compare()?;
//! for diff in session.effective_diffs(&report) {
//!     println!("row {}: {:?}", diff.record.index, diff.significant_columns);
//! }
//! # Ok(())
//! # }
//! ```

mod cell_type;
mod config;
mod dataset;
mod diff;
mod output;
mod session;
mod sort;
mod suppress;

pub use cell_type::{classify, CellType};
pub use config::{ConfigError, ReconConfig, ReconConfigBuilder};
pub use dataset::{unified_headers, Dataset, Row};
pub use diff::{datasets_equal, diff_datasets, diff_rows, rows_match, DiffRecord, DiffReport};
pub use output::json::{
    effective_to_cell_diffs, report_to_cell_diffs, serialize_cell_diffs, serialize_diff_report,
    serialize_effective_diffs, CellDiff,
};
pub use session::{ReconSession, SessionError, Side};
pub use sort::{
    sort_rows, RowComparator, SortCriterion, SortDirection, SortSpec, SortSpecError,
};
pub use suppress::{cell_significant, cell_type_mismatch, DiffKey, EffectiveDiff, SuppressionSet};
