//! Multi-key row ordering.
//!
//! A [`SortSpec`] is an ordered list of `(column, direction)` criteria; the
//! first criterion is primary and later ones break ties. A [`RowComparator`]
//! compiles a spec into a composite, locale-aware ordering over rows: string
//! cells are compared under the collation rules of the configured locale,
//! never by byte order, and a column absent from a row compares as the empty
//! string. The comparator reports `Equal` when every criterion ties, so it
//! must be paired with a stable sort for earlier groupings to survive.

use std::cmp::Ordering;
use std::fmt;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::Locale;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ReconConfig;
use crate::dataset::Row;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// One `(column, direction)` sort criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortCriterion {
    pub column: String,
    pub direction: SortDirection,
}

impl SortCriterion {
    pub fn ascending(column: impl Into<String>) -> SortCriterion {
        SortCriterion {
            column: column.into(),
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(column: impl Into<String>) -> SortCriterion {
        SortCriterion {
            column: column.into(),
            direction: SortDirection::Descending,
        }
    }
}

/// An ordered list of sort criteria. Duplicate columns beyond their first
/// occurrence are ignored at comparator construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub criteria: Vec<SortCriterion>,
}

impl SortSpec {
    pub fn new(criteria: Vec<SortCriterion>) -> SortSpec {
        SortSpec { criteria }
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}

/// Errors rejected when compiling a [`SortSpec`] into a [`RowComparator`].
///
/// Malformed configuration is the only failure the engine knows; malformed
/// data never errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SortSpecError {
    #[error("sort criterion {index} has an empty column name")]
    EmptyColumn { index: usize },

    #[error("no collation data available for locale '{locale}'")]
    UnsupportedLocale { locale: String },
}

/// A compiled, locale-aware composite ordering over rows.
pub struct RowComparator {
    locale: String,
    criteria: Vec<SortCriterion>,
    collator: Collator,
}

impl RowComparator {
    /// Validates `spec` and builds a comparator using the collation rules of
    /// `config.locale`.
    pub fn new(spec: &SortSpec, config: &ReconConfig) -> Result<RowComparator, SortSpecError> {
        for (index, criterion) in spec.criteria.iter().enumerate() {
            if criterion.column.is_empty() {
                return Err(SortSpecError::EmptyColumn { index });
            }
        }

        let mut criteria: Vec<SortCriterion> = Vec::with_capacity(spec.criteria.len());
        for criterion in &spec.criteria {
            if !criteria.iter().any(|c| c.column == criterion.column) {
                criteria.push(criterion.clone());
            }
        }

        let locale: Locale =
            config
                .locale
                .parse()
                .map_err(|_| SortSpecError::UnsupportedLocale {
                    locale: config.locale.clone(),
                })?;
        let collator = Collator::try_new(&locale.into(), CollatorOptions::new()).map_err(|_| {
            SortSpecError::UnsupportedLocale {
                locale: config.locale.clone(),
            }
        })?;

        Ok(RowComparator {
            locale: config.locale.clone(),
            criteria,
            collator,
        })
    }

    /// Compares two rows criterion by criterion, returning the first
    /// non-equal ordering. All-tie rows compare `Equal`.
    pub fn compare(&self, a: &Row, b: &Row) -> Ordering {
        for criterion in &self.criteria {
            let ord = self
                .collator
                .compare(a.value(&criterion.column), b.value(&criterion.column));
            let ord = match criterion.direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    }

    /// The effective criteria after duplicate-column removal.
    pub fn criteria(&self) -> &[SortCriterion] {
        &self.criteria
    }
}

impl fmt::Debug for RowComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowComparator")
            .field("locale", &self.locale)
            .field("criteria", &self.criteria)
            .finish_non_exhaustive()
    }
}

/// Stable sort of `rows` under `cmp`, returning a new sequence.
///
/// The input is never mutated. `slice::sort_by` is stable, so rows that tie
/// under every criterion keep their relative input order.
pub fn sort_rows(rows: &[Row], cmp: &RowComparator) -> Vec<Row> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| cmp.compare(a, b));
    sorted
}
