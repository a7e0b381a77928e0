//! Domain models for census microdata.
//!
//! These are the validated entity models: a [`Dwelling`] owns its
//! [`Resident`]s and [`DeceasedRecord`]s by value (structural cascade on
//! drop), and a [`ResponsiblePerson`] extends at most one resident per
//! dwelling. Raw, unvalidated record shapes live in [`crate::schema`].

pub mod collections;
pub mod deceased;
pub mod dwelling;
pub mod resident;
pub mod responsible;
pub mod types;

pub use collections::CensusSnapshot;
pub use deceased::DeceasedRecord;
pub use dwelling::Dwelling;
pub use resident::{Resident, derive_age};
pub use responsible::ResponsiblePerson;
pub use types::{ConstructionType, DwellingSpecies, RaceColor, Sex};
