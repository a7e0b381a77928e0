//! Aggregation engine: grouped counts, histograms, descriptive
//! statistics and cross-tabulations over validated record collections.
//!
//! Every operation here is a pure function over an immutable slice and
//! is safe to call concurrently. Business rules (derived ages, bracket
//! codes) are settled during validation; this layer only summarizes.
//! Missing values never vanish silently: they are excluded from the
//! arithmetic and reported in an explicit tally.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// A descriptive statistic that may have had no contributing records.
///
/// `NotAvailable` is a sentinel, not an error: zero contributing records
/// means "no data", which must not be conflated with a measured zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Stat {
    /// A computed value
    Value(f64),
    /// No record contributed to the statistic
    NotAvailable,
}

impl Stat {
    /// The computed value, when available
    #[must_use]
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Value(v) => Some(v),
            Self::NotAvailable => None,
        }
    }
}

/// A mean together with the tally of records that supplied no value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeanOutcome {
    /// Arithmetic mean over the records that supplied the field
    pub stat: Stat,
    /// Records excluded because the field was missing
    pub missing: usize,
}

/// Total record count; 0 for the empty collection.
#[must_use]
pub fn count<T>(records: &[T]) -> usize {
    records.len()
}

/// Arithmetic mean of a numeric field across the records that supply it.
///
/// Records where `field` yields `None` join the `missing` tally and
/// neither numerator nor denominator; when no record supplies the field
/// the result is [`Stat::NotAvailable`].
pub fn mean<T>(records: &[T], field: impl Fn(&T) -> Option<f64>) -> MeanOutcome {
    let mut sum = 0.0;
    let mut present = 0usize;
    let mut missing = 0usize;
    for record in records {
        match field(record) {
            Some(value) => {
                sum += value;
                present += 1;
            }
            None => missing += 1,
        }
    }
    let stat = if present == 0 {
        Stat::NotAvailable
    } else {
        Stat::Value(sum / present as f64)
    };
    MeanOutcome { stat, missing }
}

/// A half-open numeric bin `[lower, upper)`; `upper = None` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    /// Inclusive lower bound
    pub lower: f64,
    /// Exclusive upper bound, or unbounded when `None`
    pub upper: Option<f64>,
}

impl Bin {
    /// Whether `value` falls inside this bin
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.lower && self.upper.is_none_or(|upper| value < upper)
    }
}

/// Per-bin counts plus the tallies of values that landed nowhere
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// Bins in caller order
    pub bins: Vec<Bin>,
    /// Count per bin, aligned with `bins`
    pub counts: Vec<usize>,
    /// Values present but outside every bin
    pub excluded: usize,
    /// Records where the field was missing
    pub missing: usize,
}

/// Partition a numeric field into caller-supplied half-open bins.
///
/// Values outside every bin are not silently dropped: they are counted
/// in [`Histogram::excluded`]. A value on a shared boundary belongs to
/// the first bin that contains it.
pub fn histogram<T>(
    records: &[T],
    field: impl Fn(&T) -> Option<f64>,
    bins: &[Bin],
) -> Histogram {
    let mut counts = vec![0usize; bins.len()];
    let mut excluded = 0usize;
    let mut missing = 0usize;
    for record in records {
        match field(record) {
            Some(value) => match bins.iter().position(|bin| bin.contains(value)) {
                Some(index) => counts[index] += 1,
                None => excluded += 1,
            },
            None => missing += 1,
        }
    }
    Histogram {
        bins: bins.to_vec(),
        counts,
        excluded,
        missing,
    }
}

/// Group records by a categorical key.
///
/// The map imposes no order among categories (callers sort for display)
/// but within each group the records keep their input order.
pub fn group_by<'a, T, K: Eq + Hash>(
    records: &'a [T],
    key: impl Fn(&T) -> K,
) -> FxHashMap<K, Vec<&'a T>> {
    let mut groups: FxHashMap<K, Vec<&T>> = FxHashMap::default();
    for record in records {
        groups.entry(key(record)).or_default().push(record);
    }
    groups
}

/// A rectangular two-dimensional count matrix over two full domains
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossTab<R, C> {
    /// Row categories, in declared order
    pub rows: Vec<R>,
    /// Column categories, in declared order
    pub cols: Vec<C>,
    /// `counts[row][col]`, zero-filled for absent combinations
    pub counts: Vec<Vec<usize>>,
    /// Records falling outside either declared domain
    pub excluded: usize,
}

impl<R, C> CrossTab<R, C> {
    /// Counts down one column, aligned with `rows`.
    #[must_use]
    pub fn column(&self, col: usize) -> Vec<usize> {
        self.counts.iter().map(|row| row[col]).collect()
    }
}

/// Two-dimensional grouping over the full declared domains.
///
/// The result is always `|rows| × |cols|` and never sparse: every
/// combination is present, zero-count ones included. Records whose row
/// or column category is missing or undeclared join the excluded tally.
pub fn cross_tabulate<T, R, C>(
    records: &[T],
    rows: &[R],
    cols: &[C],
    row_of: impl Fn(&T) -> Option<R>,
    col_of: impl Fn(&T) -> Option<C>,
) -> CrossTab<R, C>
where
    R: PartialEq + Clone,
    C: PartialEq + Clone,
{
    let mut counts = vec![vec![0usize; cols.len()]; rows.len()];
    let mut excluded = 0usize;
    for record in records {
        let position = row_of(record)
            .and_then(|r| rows.iter().position(|row| *row == r))
            .zip(col_of(record).and_then(|c| cols.iter().position(|col| *col == c)));
        match position {
            Some((row, col)) => counts[row][col] += 1,
            None => excluded += 1,
        }
    }
    CrossTab {
        rows: rows.to_vec(),
        cols: cols.to_vec(),
        counts,
        excluded,
    }
}
