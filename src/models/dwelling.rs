//! Dwelling entity model.
//!
//! A dwelling owns its residents and deceased records by value, so
//! dropping a dwelling drops every dependent record with it — deletion
//! is a structural operation, not a cross-table cascade rule.

use serde::{Deserialize, Serialize};

use crate::models::deceased::DeceasedRecord;
use crate::models::resident::Resident;
use crate::models::types::{ConstructionType, DwellingSpecies};

/// A validated household unit record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dwelling {
    /// Record identifier
    pub id: String,
    /// Two-letter state (UF) code
    pub uf: String,
    /// Municipality name
    pub municipio: String,
    /// Species of dwelling (item 1.11)
    pub species: DwellingSpecies,
    /// Construction type (item 1.12)
    pub construction: ConstructionType,
    /// Water-supply code (item 3.01)
    pub water_supply: String,
    /// Number of bathrooms (item 3.04)
    pub bathrooms: u32,
    /// Sewage-destination code (item 3.07)
    pub sewage_destination: String,
    /// Garbage-collection code (item 3.09)
    pub garbage_collection: String,
    /// Residents enumerated in this dwelling
    pub residents: Vec<Resident>,
    /// Deaths reported by this dwelling
    pub deceased: Vec<DeceasedRecord>,
}

impl Dwelling {
    /// The dwelling's responsible resident, when one carries income answers.
    #[must_use]
    pub fn responsible_person(&self) -> Option<&Resident> {
        self.residents.iter().find(|r| r.responsible.is_some())
    }
}
