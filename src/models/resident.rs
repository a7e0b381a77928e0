//! Resident entity model.
//!
//! A resident is a person enumerated within a dwelling. Each resident
//! belongs to exactly one dwelling, which owns it by value; the optional
//! [`ResponsiblePerson`](crate::models::ResponsiblePerson) extension
//! carries the income answers asked only of the household's responsible
//! resident.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::{AgeBands, AgeRounding};
use crate::models::responsible::ResponsiblePerson;
use crate::models::types::{RaceColor, Sex};

/// A validated resident record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resident {
    /// Given name (item 2.03.1)
    pub given_name: String,
    /// Surname (item 2.03.2)
    pub surname: String,
    /// Sex (item 2.04)
    pub sex: Sex,
    /// Birth date, when declared (item 2.05)
    pub birth_date: Option<NaiveDate>,
    /// Age in completed years, derived from the birth date when present
    pub age: u32,
    /// Relationship to the responsible person, codes 01-20 (item 2.06)
    pub relationship: String,
    /// Race/color (item 4.01)
    pub race_color: RaceColor,
    /// Indigenous self-identification (item 4.02)
    pub considers_indigenous: Option<bool>,
    /// Indigenous ethnicity, present only with self-identification (item 4.03)
    pub indigenous_ethnicity: Option<String>,
    /// Whether the resident speaks an indigenous language (item 4.04)
    pub speaks_indigenous_language: Option<bool>,
    /// Literacy flag, asked only of residents aged 5 or older (item 6.01)
    pub literate: Option<bool>,
    /// Income answers when this resident is the household's responsible person
    pub responsible: Option<ResponsiblePerson>,
}

impl Resident {
    /// Index of this resident's age band within `bands`.
    #[must_use]
    pub fn age_band(&self, bands: &AgeBands) -> Option<usize> {
        bands.band_of(self.age)
    }

    /// Monthly income when this resident is the responsible person.
    #[must_use]
    pub fn monthly_income(&self) -> Option<f64> {
        self.responsible.as_ref().and_then(|r| r.monthly_income)
    }
}

/// Derive an age in whole years from a birth date and a reference date.
///
/// A reference date on or before the birth date yields 0. Feb 29 birth
/// dates anniversary on Mar 1 in non-leap years.
#[must_use]
pub fn derive_age(birth_date: NaiveDate, reference_date: NaiveDate, rounding: AgeRounding) -> u32 {
    if reference_date <= birth_date {
        return 0;
    }
    let mut last_anniversary_year = reference_date.year();
    if reference_date < anniversary(birth_date, reference_date.year()) {
        last_anniversary_year -= 1;
    }
    let completed = (last_anniversary_year - birth_date.year()).max(0) as u32;
    match rounding {
        AgeRounding::Truncate => completed,
        AgeRounding::Nearest => {
            let last = anniversary(birth_date, last_anniversary_year);
            let next = anniversary(birth_date, last_anniversary_year + 1);
            let since = (reference_date - last).num_days();
            let until = (next - reference_date).num_days();
            if since > until { completed + 1 } else { completed }
        }
    }
}

fn anniversary(birth_date: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birth_date.month(), birth_date.day())
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).unwrap())
}
