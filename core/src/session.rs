//! Caller-owned comparison session.
//!
//! `ReconSession` is the single explicit value that replaces ambient UI
//! state: it owns the two source datasets, the active sort specification,
//! and the suppression set for the current comparison context. The engine
//! functions it orchestrates are pure; the session is the only stateful
//! piece, and it is owned by exactly one caller at a time.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{ConfigError, ReconConfig};
use crate::dataset::Dataset;
use crate::diff::{diff_datasets, DiffReport};
use crate::sort::{RowComparator, SortSpec, SortSpecError};
use crate::suppress::{DiffKey, EffectiveDiff, SuppressionSet};

/// Which source dataset an operation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Errors produced by session orchestration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("no {side} dataset has been loaded")]
    MissingDataset { side: Side },

    #[error(transparent)]
    Sort(#[from] SortSpecError),
}

/// One comparison context: two datasets, a sort specification, and the
/// suppression decisions made against their current diff.
#[derive(Debug)]
pub struct ReconSession {
    config: ReconConfig,
    left: Option<Dataset>,
    right: Option<Dataset>,
    sort_spec: SortSpec,
    suppressions: SuppressionSet,
}

impl ReconSession {
    /// Creates a session with a validated configuration.
    pub fn new(config: ReconConfig) -> Result<ReconSession, ConfigError> {
        config.validate()?;
        Ok(ReconSession {
            config,
            left: None,
            right: None,
            sort_spec: SortSpec::default(),
            suppressions: SuppressionSet::new(),
        })
    }

    pub fn config(&self) -> &ReconConfig {
        &self.config
    }

    /// Loads (or reloads) the left dataset. Reloading either side starts a
    /// new comparison context, so all suppressions are cleared.
    pub fn load_left(&mut self, dataset: Dataset) {
        self.left = Some(dataset);
        self.suppressions.clear();
    }

    /// Loads (or reloads) the right dataset; clears all suppressions.
    pub fn load_right(&mut self, dataset: Dataset) {
        self.right = Some(dataset);
        self.suppressions.clear();
    }

    pub fn set_sort_spec(&mut self, spec: SortSpec) {
        self.sort_spec = spec;
    }

    pub fn sort_spec(&self) -> &SortSpec {
        &self.sort_spec
    }

    /// Sorts both datasets under the active sort specification and diffs
    /// them positionally.
    pub fn compare(&self) -> Result<DiffReport, SessionError> {
        let left = self
            .left
            .as_ref()
            .ok_or(SessionError::MissingDataset { side: Side::Left })?;
        let right = self
            .right
            .as_ref()
            .ok_or(SessionError::MissingDataset { side: Side::Right })?;
        let cmp = RowComparator::new(&self.sort_spec, &self.config)?;
        Ok(diff_datasets(&left.sorted(&cmp), &right.sorted(&cmp)))
    }

    /// True iff the two datasets are equivalent under the active ordering.
    pub fn datasets_equal(&self) -> Result<bool, SessionError> {
        Ok(self.compare()?.is_empty())
    }

    pub fn toggle_suppression(&mut self, key: DiffKey) {
        self.suppressions.toggle(key);
    }

    pub fn is_suppressed(&self, key: &DiffKey) -> bool {
        self.suppressions.is_suppressed(key)
    }

    pub fn clear_suppressions(&mut self) {
        self.suppressions.clear();
    }

    pub fn suppressions(&self) -> &SuppressionSet {
        &self.suppressions
    }

    /// Applies the session's suppressions and type-check setting to a
    /// report produced by [`compare`].
    ///
    /// [`compare`]: ReconSession::compare
    pub fn effective_diffs(&self, report: &DiffReport) -> Vec<EffectiveDiff> {
        self.suppressions
            .effective_diffs(report, self.config.type_check_enabled)
    }
}
