//! Coded-category registry for census questionnaire code tables.
//!
//! Census microdata carries coded answers (dwelling species "1",
//! construction type "011", water supply "3", ...). The registry is the
//! single source of code-to-label mappings: it is populated at
//! configuration time, read-only during aggregation, and never
//! substitutes a default for an unregistered code — callers decide
//! whether to reject the record or surface the raw code.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{CensoError, Result};

/// Enumeration identifiers for the questionnaire code tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Dwelling species (questionnaire item 1.11)
    DwellingSpecies,
    /// Construction type (item 1.12)
    ConstructionType,
    /// Sex (item 2.04)
    Sex,
    /// Relationship to the responsible person (item 2.06)
    Relationship,
    /// Race/color (item 4.01)
    RaceColor,
    /// Water supply (item 3.01)
    WaterSupply,
    /// Sewage destination (item 3.07)
    SewageDestination,
    /// Garbage collection (item 3.09)
    GarbageCollection,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DwellingSpecies => "dwelling-species",
            Self::ConstructionType => "construction-type",
            Self::Sex => "sex",
            Self::Relationship => "relationship",
            Self::RaceColor => "race-color",
            Self::WaterSupply => "water-supply",
            Self::SewageDestination => "sewage-destination",
            Self::GarbageCollection => "garbage-collection",
        };
        f.write_str(name)
    }
}

/// Lookup table from coded values to human-readable labels
#[derive(Debug, Clone, Default)]
pub struct CodeRegistry {
    labels: FxHashMap<(Category, String), String>,
}

impl CodeRegistry {
    /// Create a new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry preloaded with the IBGE 2022 questionnaire tables
    #[must_use]
    pub fn with_default_tables() -> Self {
        let mut registry = Self::new();
        for (category, code, label) in DEFAULT_TABLES {
            registry.register(*category, code, label);
        }
        registry
    }

    /// Register a code-to-label mapping for a category.
    ///
    /// Registration is append-only configuration; re-registering a code
    /// replaces its label.
    pub fn register(&mut self, category: Category, code: &str, label: &str) {
        self.labels
            .insert((category, code.to_string()), label.to_string());
    }

    /// Resolve a coded value to its label.
    ///
    /// # Errors
    /// Returns [`CensoError::UnknownCode`] when the code is not
    /// registered for the category.
    pub fn decode(&self, category: Category, code: &str) -> Result<&str> {
        self.labels
            .get(&(category, code.to_string()))
            .map(String::as_str)
            .ok_or_else(|| CensoError::UnknownCode {
                category,
                code: code.to_string(),
            })
    }

    /// Reverse lookup: find the code registered for a label.
    #[must_use]
    pub fn encode(&self, category: Category, label: &str) -> Option<&str> {
        self.labels
            .iter()
            .find(|((cat, _), registered)| *cat == category && registered.as_str() == label)
            .map(|((_, code), _)| code.as_str())
    }

    /// All codes registered for a category, sorted ascending.
    #[must_use]
    pub fn codes(&self, category: Category) -> Vec<&str> {
        use itertools::Itertools;
        self.labels
            .keys()
            .filter(|(cat, _)| *cat == category)
            .map(|(_, code)| code.as_str())
            .sorted_unstable()
            .collect()
    }

    /// Whether a code is registered for a category.
    #[must_use]
    pub fn contains(&self, category: Category, code: &str) -> bool {
        self.labels.contains_key(&(category, code.to_string()))
    }
}

/// Code tables from the IBGE 2022 census questionnaire
const DEFAULT_TABLES: &[(Category, &str, &str)] = &[
    // Item 1.11 - species of dwelling
    (Category::DwellingSpecies, "1", "Domicílio Particular Permanente"),
    (Category::DwellingSpecies, "5", "Domicílio Particular Improvisado"),
    (Category::DwellingSpecies, "6", "Domicílio Coletivo com Morador"),
    // Item 1.12 - construction type
    (Category::ConstructionType, "011", "Casa"),
    (Category::ConstructionType, "012", "Casa de vila ou em condomínio"),
    (Category::ConstructionType, "013", "Apartamento"),
    (Category::ConstructionType, "014", "Habitação em casa de cômodos ou cortiço"),
    (Category::ConstructionType, "015", "Estrutura degradada ou inacabada"),
    (Category::ConstructionType, "016", "Outros"),
    // Item 2.04 - sex
    (Category::Sex, "1", "Masculino"),
    (Category::Sex, "2", "Feminino"),
    // Item 2.06 - relationship to the responsible person
    (Category::Relationship, "01", "Pessoa responsável"),
    (Category::Relationship, "02", "Cônjuge ou companheiro(a) de sexo diferente"),
    (Category::Relationship, "03", "Cônjuge ou companheiro(a) do mesmo sexo"),
    (Category::Relationship, "04", "Filho(a) do responsável e do cônjuge"),
    (Category::Relationship, "05", "Filho(a) somente do responsável"),
    (Category::Relationship, "06", "Enteado(a)"),
    (Category::Relationship, "07", "Genro ou nora"),
    (Category::Relationship, "08", "Pai, mãe, padrasto ou madrasta"),
    (Category::Relationship, "09", "Sogro(a)"),
    (Category::Relationship, "10", "Neto(a)"),
    (Category::Relationship, "11", "Bisneto(a)"),
    (Category::Relationship, "12", "Irmão ou irmã"),
    (Category::Relationship, "13", "Avô ou avó"),
    (Category::Relationship, "14", "Outro parente"),
    (Category::Relationship, "15", "Agregado(a)"),
    (Category::Relationship, "16", "Convivente"),
    (Category::Relationship, "17", "Pensionista"),
    (Category::Relationship, "18", "Empregado(a) doméstico(a)"),
    (Category::Relationship, "19", "Parente do(a) empregado(a) doméstico(a)"),
    (Category::Relationship, "20", "Individual em domicílio coletivo"),
    // Item 4.01 - race/color
    (Category::RaceColor, "1", "Branca"),
    (Category::RaceColor, "2", "Preta"),
    (Category::RaceColor, "3", "Amarela"),
    (Category::RaceColor, "4", "Parda"),
    (Category::RaceColor, "5", "Indígena"),
    // Item 3.01 - water supply
    (Category::WaterSupply, "1", "Rede geral de distribuição"),
    (Category::WaterSupply, "2", "Poço profundo ou artesiano"),
    (Category::WaterSupply, "3", "Poço raso, freático ou cacimba"),
    (Category::WaterSupply, "4", "Fonte, nascente ou mina"),
    (Category::WaterSupply, "5", "Carro-pipa"),
    (Category::WaterSupply, "6", "Água da chuva armazenada"),
    (Category::WaterSupply, "7", "Rios, açudes, córregos ou lagos"),
    (Category::WaterSupply, "8", "Outra forma"),
    // Item 3.07 - sewage destination
    (Category::SewageDestination, "1", "Rede geral ou pluvial"),
    (Category::SewageDestination, "2", "Fossa séptica ligada à rede"),
    (Category::SewageDestination, "3", "Fossa séptica não ligada à rede"),
    (Category::SewageDestination, "4", "Fossa rudimentar ou buraco"),
    (Category::SewageDestination, "5", "Vala"),
    (Category::SewageDestination, "6", "Rio, lago, córrego ou mar"),
    (Category::SewageDestination, "7", "Outra forma"),
    // Item 3.09 - garbage collection
    (Category::GarbageCollection, "1", "Coletado no domicílio por serviço de limpeza"),
    (Category::GarbageCollection, "2", "Depositado em caçamba de serviço de limpeza"),
    (Category::GarbageCollection, "3", "Queimado na propriedade"),
    (Category::GarbageCollection, "4", "Enterrado na propriedade"),
    (Category::GarbageCollection, "5", "Jogado em terreno baldio ou logradouro"),
    (Category::GarbageCollection, "6", "Outro destino"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_is_deterministic_over_registered_codes() {
        let registry = CodeRegistry::with_default_tables();
        let first = registry.decode(Category::ConstructionType, "011").unwrap();
        let second = registry.decode(Category::ConstructionType, "011").unwrap();
        assert_eq!(first, "Casa");
        assert_eq!(first, second);
    }

    #[test]
    fn decode_fails_for_unregistered_code() {
        let registry = CodeRegistry::with_default_tables();
        let err = registry.decode(Category::WaterSupply, "9").unwrap_err();
        assert_eq!(
            err,
            CensoError::UnknownCode {
                category: Category::WaterSupply,
                code: "9".to_string(),
            }
        );
    }

    #[test]
    fn registration_is_append_only() {
        let mut registry = CodeRegistry::new();
        registry.register(Category::WaterSupply, "9", "Dessalinização");
        assert_eq!(
            registry.decode(Category::WaterSupply, "9").unwrap(),
            "Dessalinização"
        );
    }
}
