//! Deceased-record entity model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A death reported by a dwelling (section 8)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeceasedRecord {
    /// Name of the deceased (item 8.02.1)
    pub name: String,
    /// Date of death (item 8.03)
    pub date_of_death: NaiveDate,
    /// Age at death in completed years (item 8.05)
    pub age_at_death: u32,
}
