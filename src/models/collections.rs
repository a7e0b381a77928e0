//! Census snapshot collection.
//!
//! A [`CensusSnapshot`] is an immutable, validated record collection.
//! Every report assembled from the same snapshot sees the same data, so
//! a refresh of the source mid-computation cannot produce cross-report
//! inconsistency; callers take a new snapshot instead.

use serde::{Deserialize, Serialize};

use crate::models::deceased::DeceasedRecord;
use crate::models::dwelling::Dwelling;
use crate::models::resident::Resident;

/// An immutable collection of validated dwellings with query helpers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CensusSnapshot {
    dwellings: Vec<Dwelling>,
}

impl CensusSnapshot {
    /// Create an empty snapshot
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a snapshot from validated dwellings
    #[must_use]
    pub fn from_dwellings(dwellings: Vec<Dwelling>) -> Self {
        Self { dwellings }
    }

    /// All dwellings in intake order
    #[must_use]
    pub fn dwellings(&self) -> &[Dwelling] {
        &self.dwellings
    }

    /// Number of dwellings
    #[must_use]
    pub fn dwelling_count(&self) -> usize {
        self.dwellings.len()
    }

    /// Every resident across all dwellings, in intake order
    #[must_use]
    pub fn residents(&self) -> Vec<&Resident> {
        self.dwellings
            .iter()
            .flat_map(|d| d.residents.iter())
            .collect()
    }

    /// Residents carrying responsible-person income answers
    #[must_use]
    pub fn responsible_persons(&self) -> Vec<&Resident> {
        self.dwellings
            .iter()
            .filter_map(Dwelling::responsible_person)
            .collect()
    }

    /// Every reported death across all dwellings
    #[must_use]
    pub fn deceased(&self) -> Vec<&DeceasedRecord> {
        self.dwellings
            .iter()
            .flat_map(|d| d.deceased.iter())
            .collect()
    }

    /// Snapshot restricted to dwellings in the given UF codes.
    #[must_use]
    pub fn filter_regions(&self, ufs: &[&str]) -> Self {
        Self {
            dwellings: self
                .dwellings
                .iter()
                .filter(|d| ufs.contains(&d.uf.as_str()))
                .cloned()
                .collect(),
        }
    }

    /// Snapshot with residents older than `max_age` removed.
    ///
    /// Dwellings are kept even when the filter empties them, so
    /// dwelling-level statistics stay comparable across age filters.
    #[must_use]
    pub fn filter_max_age(&self, max_age: u32) -> Self {
        let dwellings = self
            .dwellings
            .iter()
            .map(|d| {
                let mut dwelling = d.clone();
                dwelling.residents.retain(|r| r.age <= max_age);
                dwelling
            })
            .collect();
        Self { dwellings }
    }

    /// Remove a dwelling by identifier, dropping its residents and
    /// deceased records with it. Returns whether a dwelling was removed.
    pub fn remove_dwelling(&mut self, id: &str) -> bool {
        let before = self.dwellings.len();
        self.dwellings.retain(|d| d.id != id);
        self.dwellings.len() != before
    }
}
