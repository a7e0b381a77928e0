//! Error handling for the census core.
//!
//! Validation failures are accumulated per record as [`Violation`]s so a
//! caller sees every problem with a record at once, and one bad record
//! never blocks the rest of a batch.

use chrono::NaiveDate;

use crate::registry::Category;

/// Specialized error type for census core operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CensoError {
    /// A coded value is not registered for its category
    #[error("unknown code {code:?} for category {category}")]
    UnknownCode {
        /// Category the lookup ran against
        category: Category,
        /// The raw code that failed to resolve
        code: String,
    },

    /// Declared age contradicts the age derived from the birth date
    #[error("declared age {declared} contradicts derived age {derived}")]
    InconsistentAge {
        /// Age supplied on the record
        declared: u32,
        /// Age derived from birth date and reference date
        derived: u32,
    },

    /// Income value outside the configured bracket domain
    #[error("income {income} is outside the bracket domain")]
    BracketLookup {
        /// The offending income value
        income: f64,
    },

    /// A record failed one or more entity invariants
    #[error("record {record_id:?} failed validation: {}", format_violations(.violations))]
    Validation {
        /// Identifier of the rejected record
        record_id: String,
        /// Every invariant the record violated
        violations: Vec<Violation>,
    },
}

fn format_violations(violations: &[Violation]) -> String {
    use itertools::Itertools;
    violations.iter().map(ToString::to_string).join("; ")
}

/// A single entity-invariant violation found during validation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Violation {
    /// Coded field carries a value absent from the registry
    #[error("field {field}: unknown code {code:?} for category {category}")]
    UnknownCode {
        /// Name of the raw field
        field: &'static str,
        /// Category the code belongs to
        category: Category,
        /// The unrecognized code
        code: String,
    },

    /// Declared age disagrees with the age derived from the birth date
    #[error("declared age {declared} disagrees with derived age {derived}")]
    InconsistentAge {
        /// Age supplied on the record
        declared: u32,
        /// Age derived from birth date and reference date
        derived: u32,
    },

    /// Neither a birth date nor a declared age was supplied
    #[error("resident has neither birth date nor declared age")]
    MissingAge,

    /// Literacy flag present on a resident under the literacy age
    #[error("literacy flag set for resident aged {age} (threshold {threshold})")]
    LiteracyUnderThreshold {
        /// The resident's age
        age: u32,
        /// Minimum age for which the flag is meaningful
        threshold: u32,
    },

    /// Ethnicity text present without indigenous self-identification
    #[error("indigenous ethnicity given but self-identification is {0:?}")]
    EthnicityWithoutSelfIdentification(Option<bool>),

    /// Relationship-to-head code outside the questionnaire range
    #[error("relationship code {0:?} outside 01-20")]
    RelationshipOutOfRange(String),

    /// Monthly income below zero
    #[error("negative monthly income {0}")]
    NegativeIncome(f64),

    /// Supplied income-bracket code disagrees with the derived bracket
    #[error("supplied bracket {supplied:?} disagrees with derived bracket {derived:?}")]
    BracketMismatch {
        /// Bracket code on the record
        supplied: char,
        /// Bracket derived from monthly income
        derived: char,
    },

    /// More than one resident of a dwelling carries income answers
    #[error("dwelling declares {0} responsible persons")]
    DuplicateResponsiblePerson(usize),

    /// Date of death later than the record's reference date
    #[error("date of death {date} is after the reference date {reference}")]
    DeathInFuture {
        /// The recorded date of death
        date: NaiveDate,
        /// Reference date at intake
        reference: NaiveDate,
    },
}

/// Result type for census core operations
pub type Result<T> = std::result::Result<T, CensoError>;
