//! Nonzero/zero production summaries.
//!
//! A summary splits a record collection into countries with positive
//! production and countries with none, and names the largest and smallest
//! positive producers. The per-year summary runs over the full year slice
//! while the cumulative summary runs over the already-N-limited top set.
use std::cmp::Ordering;

use crate::dataset::{Dataset, JoinedRecord};
use crate::query::{self, CumulativeRecord};

/// Outcome of a nonzero/zero split over one record collection.
#[derive(Debug, Clone)]
pub struct SummaryReport<T> {
    /// Record with the greatest positive value; `None` when nothing is
    /// positive.
    pub nonzero_max: Option<T>,
    /// Record with the smallest positive value; `None` when nothing is
    /// positive.
    pub nonzero_min: Option<T>,
    /// Every record whose value is not positive, full listing.
    pub zero: Vec<T>,
}

impl<T> SummaryReport<T> {
    pub fn has_nonzero(&self) -> bool {
        self.nonzero_max.is_some()
    }
}

/// Split `records` by `value` into positive and zero subsets.
///
/// The positive subset is sorted stably in descending value order; the max is
/// its first entry and the min its last, so equal values resolve to the first
/// and last encountered respectively.
pub fn summarize<T, F>(records: &[T], value: F) -> SummaryReport<T>
where
    T: Clone,
    F: Fn(&T) -> f64,
{
    let mut nonzero: Vec<T> = Vec::new();
    let mut zero: Vec<T> = Vec::new();

    for record in records {
        if value(record) > 0.0 {
            nonzero.push(record.clone());
        } else {
            zero.push(record.clone());
        }
    }

    nonzero.sort_by(|a, b| value(b).partial_cmp(&value(a)).unwrap_or(Ordering::Equal));

    SummaryReport {
        nonzero_max: nonzero.first().cloned(),
        nonzero_min: nonzero.last().cloned(),
        zero,
    }
}

/// Summary over every record of one year (not limited to the top-N display
/// slice).
pub fn year_summary(dataset: &Dataset, year: i32) -> SummaryReport<JoinedRecord> {
    let rows = query::year_slice(dataset, year);
    summarize(&rows, |r| r.production)
}

/// Summary over an already-limited cumulative top-N set.
pub fn cumulative_summary(top: &[CumulativeRecord]) -> SummaryReport<CumulativeRecord> {
    summarize(top, |r| r.total_production)
}
