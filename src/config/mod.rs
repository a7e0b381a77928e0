//! Configuration for census validation and reporting.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::report::format::Locale;
use crate::schema::brackets::IncomeBrackets;

/// Minimum age for which the literacy question is asked (item 6.01)
pub const LITERACY_AGE_THRESHOLD: u32 = 5;

/// How to turn the span between birth date and reference date into an age
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeRounding {
    /// Floor of completed years (the questionnaire's convention)
    Truncate,
    /// Round to the nearest whole year
    Nearest,
}

/// Configuration for census intake and report assembly
#[derive(Debug, Clone)]
pub struct CensusConfig {
    /// Reference date for age derivation (defaults to the intake date)
    pub reference_date: NaiveDate,
    /// Policy for deriving age from a birth date
    pub age_rounding: AgeRounding,
    /// Ordered partition of ages used for pyramid-style reporting
    pub age_bands: AgeBands,
    /// Ascending, non-overlapping monthly-income bracket table
    pub income_brackets: IncomeBrackets,
    /// Locale for numeric and currency formatting
    pub locale: Locale,
}

impl Default for CensusConfig {
    fn default() -> Self {
        Self {
            reference_date: Utc::now().date_naive(),
            age_rounding: AgeRounding::Truncate,
            age_bands: AgeBands::default(),
            income_brackets: IncomeBrackets::default(),
            locale: Locale::default(),
        }
    }
}

impl CensusConfig {
    /// Create a configuration with an explicit reference date
    #[must_use]
    pub fn with_reference_date(reference_date: NaiveDate) -> Self {
        Self {
            reference_date,
            ..Self::default()
        }
    }
}

/// Ordered half-open age bands, the final band unbounded above.
///
/// Band `i` covers `[lower[i], lower[i + 1])`; the last band covers
/// `[lower[last], ∞)`. Lower bounds must be strictly ascending and start
/// at the youngest age the partition covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBands {
    lower_bounds: Vec<u32>,
}

impl Default for AgeBands {
    fn default() -> Self {
        Self {
            lower_bounds: vec![0, 5, 12, 18, 30, 60],
        }
    }
}

impl AgeBands {
    /// Create a band table from strictly ascending lower bounds.
    #[must_use]
    pub fn new(lower_bounds: Vec<u32>) -> Self {
        debug_assert!(
            lower_bounds.windows(2).all(|w| w[0] < w[1]),
            "age band lower bounds must be strictly ascending"
        );
        Self { lower_bounds }
    }

    /// Number of bands in the partition
    #[must_use]
    pub fn len(&self) -> usize {
        self.lower_bounds.len()
    }

    /// Whether the partition has no bands
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lower_bounds.is_empty()
    }

    /// Index of the band containing `age`, or `None` when `age` falls
    /// below the first lower bound.
    #[must_use]
    pub fn band_of(&self, age: u32) -> Option<usize> {
        self.lower_bounds
            .iter()
            .rposition(|&lower| age >= lower)
    }

    /// Display label for band `index`, e.g. `"5-11"` or `"60+"`.
    #[must_use]
    pub fn label(&self, index: usize) -> String {
        let lower = self.lower_bounds[index];
        match self.lower_bounds.get(index + 1) {
            Some(&upper) => format!("{lower}-{}", upper - 1),
            None => format!("{lower}+"),
        }
    }

    /// Ordered labels for every band, youngest first.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        (0..self.len()).map(|i| self.label(i)).collect()
    }
}
