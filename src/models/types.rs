//! Common domain type definitions.
//!
//! Coded questionnaire answers with a closed value set are modeled as
//! enums rather than free-form strings; the [`crate::registry`] module
//! holds the label for each code. Conversion from a raw code returns
//! `None` for unregistered values so validation can reject the record
//! instead of smuggling in a default.

use serde::{Deserialize, Serialize};

/// Species of dwelling (questionnaire item 1.11)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DwellingSpecies {
    /// Permanent private dwelling
    PermanentPrivate,
    /// Improvised private dwelling
    ImprovisedPrivate,
    /// Collective dwelling with at least one resident
    CollectiveWithResident,
}

impl DwellingSpecies {
    /// Every species, in questionnaire order
    pub const ALL: [Self; 3] = [
        Self::PermanentPrivate,
        Self::ImprovisedPrivate,
        Self::CollectiveWithResident,
    ];

    /// Parse a raw questionnaire code
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(Self::PermanentPrivate),
            "5" => Some(Self::ImprovisedPrivate),
            "6" => Some(Self::CollectiveWithResident),
            _ => None,
        }
    }

    /// The questionnaire code for this species
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::PermanentPrivate => "1",
            Self::ImprovisedPrivate => "5",
            Self::CollectiveWithResident => "6",
        }
    }
}

/// Construction type of a dwelling (item 1.12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstructionType {
    /// Detached house
    House,
    /// House inside a villa or condominium
    CondominiumHouse,
    /// Apartment
    Apartment,
    /// Room in a tenement
    Tenement,
    /// Degraded or unfinished structure
    DegradedStructure,
    /// Other construction types
    Other,
}

impl ConstructionType {
    /// Every construction type, in questionnaire order
    pub const ALL: [Self; 6] = [
        Self::House,
        Self::CondominiumHouse,
        Self::Apartment,
        Self::Tenement,
        Self::DegradedStructure,
        Self::Other,
    ];

    /// Parse a raw questionnaire code
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "011" => Some(Self::House),
            "012" => Some(Self::CondominiumHouse),
            "013" => Some(Self::Apartment),
            "014" => Some(Self::Tenement),
            "015" => Some(Self::DegradedStructure),
            "016" => Some(Self::Other),
            _ => None,
        }
    }

    /// The questionnaire code for this construction type
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::House => "011",
            Self::CondominiumHouse => "012",
            Self::Apartment => "013",
            Self::Tenement => "014",
            Self::DegradedStructure => "015",
            Self::Other => "016",
        }
    }
}

/// Sex of a resident (item 2.04)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    /// Male
    Male,
    /// Female
    Female,
}

impl Sex {
    /// Both sexes, in questionnaire order
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    /// Parse a raw questionnaire code
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(Self::Male),
            "2" => Some(Self::Female),
            _ => None,
        }
    }

    /// The questionnaire code for this sex
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Male => "1",
            Self::Female => "2",
        }
    }
}

/// Race/color of a resident (item 4.01)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RaceColor {
    /// White
    White,
    /// Black
    Black,
    /// Yellow (East Asian descent)
    Yellow,
    /// Mixed ("parda")
    Mixed,
    /// Indigenous
    Indigenous,
}

impl RaceColor {
    /// Every race/color category, in questionnaire order
    pub const ALL: [Self; 5] = [
        Self::White,
        Self::Black,
        Self::Yellow,
        Self::Mixed,
        Self::Indigenous,
    ];

    /// Parse a raw questionnaire code
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(Self::White),
            "2" => Some(Self::Black),
            "3" => Some(Self::Yellow),
            "4" => Some(Self::Mixed),
            "5" => Some(Self::Indigenous),
            _ => None,
        }
    }

    /// The questionnaire code for this category
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::White => "1",
            Self::Black => "2",
            Self::Yellow => "3",
            Self::Mixed => "4",
            Self::Indigenous => "5",
        }
    }
}
