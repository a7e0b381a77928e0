//! Responsible-person extension of a resident.

use serde::{Deserialize, Serialize};

/// Income answers for the household's responsible resident (section 7)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsiblePerson {
    /// Monthly income in the census currency, when declared (item 7.01.1)
    pub monthly_income: Option<f64>,
    /// One-character income-bracket code (item 7.01.2); derived from the
    /// monthly income when that is present, carried as answered otherwise
    pub income_bracket: Option<char>,
}
