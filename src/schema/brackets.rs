//! Monthly-income bracket table (questionnaire item 7.01.2).
//!
//! The bracket code on a responsible-person record must be derivable
//! from the monthly income through a fixed, ascending, non-overlapping
//! table. The shipped defaults express the 2022 table in multiples of
//! the R$ 1212 minimum wage; deployments substitute the authoritative
//! table through [`crate::config::CensusConfig`].

use serde::{Deserialize, Serialize};

use crate::error::{CensoError, Result};

/// Ascending, non-overlapping income brackets keyed by one-character codes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeBrackets {
    /// Code for an income of exactly zero ("sem rendimento")
    no_income_code: char,
    /// Inclusive upper bounds with their codes, strictly ascending
    steps: Vec<(f64, char)>,
    /// Code for incomes above the last step
    overflow_code: char,
}

impl Default for IncomeBrackets {
    fn default() -> Self {
        Self {
            no_income_code: '0',
            steps: vec![
                (606.0, '1'),
                (1212.0, '2'),
                (2424.0, '3'),
                (6060.0, '4'),
                (12120.0, '5'),
                (24240.0, '6'),
            ],
            overflow_code: '7',
        }
    }
}

impl IncomeBrackets {
    /// Build a bracket table from strictly ascending inclusive upper bounds.
    #[must_use]
    pub fn new(no_income_code: char, steps: Vec<(f64, char)>, overflow_code: char) -> Self {
        debug_assert!(
            steps.windows(2).all(|w| w[0].0 < w[1].0),
            "bracket upper bounds must be strictly ascending"
        );
        Self {
            no_income_code,
            steps,
            overflow_code,
        }
    }

    /// Derive the bracket code for a monthly income.
    ///
    /// Brackets are half-open on the lower side and closed on the upper:
    /// an income equal to a step's bound belongs to that step.
    ///
    /// # Errors
    /// Returns [`CensoError::BracketLookup`] for incomes outside the
    /// table's domain (negative values).
    pub fn bracket_for(&self, income: f64) -> Result<char> {
        if income < 0.0 || !income.is_finite() {
            return Err(CensoError::BracketLookup { income });
        }
        if income == 0.0 {
            return Ok(self.no_income_code);
        }
        for &(upper, code) in &self.steps {
            if income <= upper {
                return Ok(code);
            }
        }
        Ok(self.overflow_code)
    }
}
