//! Raw record shapes and microdata validation.
//!
//! Raw records arrive with the questionnaire's field names (the wire
//! shape of the ingestion API) and are checked against the entity
//! invariants before anything is aggregated. Validation is a pure
//! function from raw record to validated record or error: it
//! accumulates every violation a record carries instead of stopping at
//! the first, and a batch is processed record by record so one invalid
//! dwelling never blocks aggregation over the rest.

pub mod brackets;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::{CensusConfig, LITERACY_AGE_THRESHOLD};
use crate::error::{CensoError, Result, Violation};
use crate::models::types::{ConstructionType, DwellingSpecies, RaceColor, Sex};
use crate::models::{
    CensusSnapshot, DeceasedRecord, Dwelling, Resident, ResponsiblePerson, derive_age,
};
use crate::registry::{Category, CodeRegistry};

/// Raw dwelling record as ingested, residents and deaths nested
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDwelling {
    /// Record identifier
    pub id: String,
    /// Two-letter state code
    pub uf: String,
    /// Municipality name
    pub municipio: String,
    /// Dwelling-species code (item 1.11)
    pub especie: String,
    /// Construction-type code (item 1.12)
    pub tipo: String,
    /// Water-supply code (item 3.01)
    pub abastecimento_agua: String,
    /// Bathroom count (item 3.04)
    pub banheiros: u32,
    /// Sewage-destination code (item 3.07)
    pub destino_esgoto: String,
    /// Garbage-collection code (item 3.09)
    pub coleta_lixo: String,
    /// Residents enumerated in the dwelling
    #[serde(default)]
    pub moradores: Vec<RawResident>,
    /// Deaths reported by the dwelling
    #[serde(default)]
    pub falecidos: Vec<RawDeceased>,
}

/// Raw resident record as ingested
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawResident {
    /// Given name (item 2.03.1)
    pub nome: String,
    /// Surname (item 2.03.2)
    pub sobrenome: String,
    /// Sex code (item 2.04)
    pub sexo: String,
    /// Birth date (item 2.05)
    #[serde(default)]
    pub data_nascimento: Option<NaiveDate>,
    /// Declared age, required when the birth date is absent
    #[serde(default)]
    pub idade: Option<u32>,
    /// Relationship-to-responsible code 01-20 (item 2.06)
    pub parentesco: String,
    /// Race/color code (item 4.01)
    pub raca_cor: String,
    /// Indigenous self-identification (item 4.02)
    #[serde(default)]
    pub considera_indigena: Option<bool>,
    /// Indigenous ethnicity (item 4.03)
    #[serde(default)]
    pub etnia_indigena: Option<String>,
    /// Indigenous-language speaker (item 4.04)
    #[serde(default)]
    pub fala_lingua_indigena: Option<bool>,
    /// Literacy flag, residents aged 5+ only (item 6.01)
    #[serde(default)]
    pub alfabetizado: Option<bool>,
    /// Income answers when this resident is the responsible person
    #[serde(default)]
    pub responsavel: Option<RawResponsible>,
}

/// Raw responsible-person answers (section 7)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawResponsible {
    /// Monthly income (item 7.01.1)
    #[serde(default)]
    pub renda_mensal: Option<f64>,
    /// Income-bracket code (item 7.01.2)
    #[serde(default)]
    pub faixa_rendimento: Option<char>,
}

/// Raw deceased record (section 8)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDeceased {
    /// Name of the deceased (item 8.02.1)
    pub nome: String,
    /// Date of death (item 8.03)
    pub data_falecimento: NaiveDate,
    /// Age at death (item 8.05)
    pub idade_falecimento: u32,
}

/// Outcome of validating a batch of raw dwelling records
#[derive(Debug, Default)]
pub struct ValidationOutcome {
    /// Snapshot of every record that passed validation, in intake order
    pub snapshot: CensusSnapshot,
    /// One [`CensoError::Validation`] per rejected record
    pub rejected: Vec<CensoError>,
}

/// Validate a batch of raw dwelling records.
///
/// Records are validated independently; valid ones land in the snapshot
/// in intake order and each invalid one contributes a single
/// [`CensoError::Validation`] carrying all of its violations.
#[must_use]
pub fn validate_batch(
    raws: &[RawDwelling],
    registry: &CodeRegistry,
    config: &CensusConfig,
) -> ValidationOutcome {
    let mut outcome = ValidationOutcome::default();
    let mut accepted = Vec::with_capacity(raws.len());
    for raw in raws {
        match validate_dwelling(raw, registry, config) {
            Ok(dwelling) => accepted.push(dwelling),
            Err(error) => outcome.rejected.push(error),
        }
    }
    log::debug!(
        "validated batch: {} accepted, {} rejected",
        accepted.len(),
        outcome.rejected.len()
    );
    outcome.snapshot = CensusSnapshot::from_dwellings(accepted);
    outcome
}

/// Validate a single raw dwelling record, nested residents and deaths
/// included.
///
/// # Errors
/// Returns [`CensoError::Validation`] carrying every violation found
/// anywhere in the record.
pub fn validate_dwelling(
    raw: &RawDwelling,
    registry: &CodeRegistry,
    config: &CensusConfig,
) -> Result<Dwelling> {
    let mut violations = Vec::new();

    let species = DwellingSpecies::from_code(&raw.especie);
    if species.is_none() {
        violations.push(unknown_code("especie", Category::DwellingSpecies, &raw.especie));
    }
    let construction = ConstructionType::from_code(&raw.tipo);
    if construction.is_none() {
        violations.push(unknown_code("tipo", Category::ConstructionType, &raw.tipo));
    }
    check_registered(
        registry,
        "abastecimento_agua",
        Category::WaterSupply,
        &raw.abastecimento_agua,
        &mut violations,
    );
    check_registered(
        registry,
        "destino_esgoto",
        Category::SewageDestination,
        &raw.destino_esgoto,
        &mut violations,
    );
    check_registered(
        registry,
        "coleta_lixo",
        Category::GarbageCollection,
        &raw.coleta_lixo,
        &mut violations,
    );

    let residents: Vec<Resident> = raw
        .moradores
        .iter()
        .filter_map(|morador| validate_resident(morador, registry, config, &mut violations))
        .collect();

    let responsible_count = residents.iter().filter(|r| r.responsible.is_some()).count();
    if responsible_count > 1 {
        violations.push(Violation::DuplicateResponsiblePerson(responsible_count));
    }

    let deceased: Vec<DeceasedRecord> = raw
        .falecidos
        .iter()
        .map(|falecido| {
            if falecido.data_falecimento > config.reference_date {
                violations.push(Violation::DeathInFuture {
                    date: falecido.data_falecimento,
                    reference: config.reference_date,
                });
            }
            DeceasedRecord {
                name: falecido.nome.clone(),
                date_of_death: falecido.data_falecimento,
                age_at_death: falecido.idade_falecimento,
            }
        })
        .collect();

    if !violations.is_empty() {
        return Err(CensoError::Validation {
            record_id: raw.id.clone(),
            violations,
        });
    }

    Ok(Dwelling {
        id: raw.id.clone(),
        uf: raw.uf.clone(),
        municipio: raw.municipio.clone(),
        // Both checked above; violations would have returned early.
        species: species.unwrap_or(DwellingSpecies::PermanentPrivate),
        construction: construction.unwrap_or(ConstructionType::House),
        water_supply: raw.abastecimento_agua.clone(),
        bathrooms: raw.banheiros,
        sewage_destination: raw.destino_esgoto.clone(),
        garbage_collection: raw.coleta_lixo.clone(),
        residents,
        deceased,
    })
}

fn validate_resident(
    raw: &RawResident,
    registry: &CodeRegistry,
    config: &CensusConfig,
    violations: &mut Vec<Violation>,
) -> Option<Resident> {
    let before = violations.len();

    let sex = Sex::from_code(&raw.sexo);
    if sex.is_none() {
        violations.push(unknown_code("sexo", Category::Sex, &raw.sexo));
    }
    let race_color = RaceColor::from_code(&raw.raca_cor);
    if race_color.is_none() {
        violations.push(unknown_code("raca_cor", Category::RaceColor, &raw.raca_cor));
    }
    if !registry.contains(Category::Relationship, &raw.parentesco) {
        violations.push(Violation::RelationshipOutOfRange(raw.parentesco.clone()));
    }

    let age = match (raw.data_nascimento, raw.idade) {
        (Some(birth), declared) => {
            let derived = derive_age(birth, config.reference_date, config.age_rounding);
            match declared {
                Some(declared) if declared != derived => {
                    violations.push(Violation::InconsistentAge { declared, derived });
                    None
                }
                _ => Some(derived),
            }
        }
        (None, Some(declared)) => Some(declared),
        (None, None) => {
            violations.push(Violation::MissingAge);
            None
        }
    };

    if let Some(age) = age
        && age < LITERACY_AGE_THRESHOLD
        && raw.alfabetizado.is_some()
    {
        violations.push(Violation::LiteracyUnderThreshold {
            age,
            threshold: LITERACY_AGE_THRESHOLD,
        });
    }

    let ethnicity = raw
        .etnia_indigena
        .as_deref()
        .filter(|etnia| !etnia.is_empty());
    if ethnicity.is_some() && raw.considera_indigena != Some(true) {
        violations.push(Violation::EthnicityWithoutSelfIdentification(
            raw.considera_indigena,
        ));
    }

    let responsible = raw
        .responsavel
        .as_ref()
        .map(|r| validate_responsible(r, config, violations));

    if violations.len() > before {
        return None;
    }

    Some(Resident {
        given_name: raw.nome.clone(),
        surname: raw.sobrenome.clone(),
        sex: sex?,
        birth_date: raw.data_nascimento,
        age: age?,
        relationship: raw.parentesco.clone(),
        race_color: race_color?,
        considers_indigenous: raw.considera_indigena,
        indigenous_ethnicity: ethnicity.map(ToString::to_string),
        speaks_indigenous_language: raw.fala_lingua_indigena,
        literate: raw.alfabetizado,
        responsible,
    })
}

fn validate_responsible(
    raw: &RawResponsible,
    config: &CensusConfig,
    violations: &mut Vec<Violation>,
) -> ResponsiblePerson {
    let mut bracket = raw.faixa_rendimento;
    if let Some(income) = raw.renda_mensal {
        match config.income_brackets.bracket_for(income) {
            Ok(derived) => {
                if let Some(supplied) = raw.faixa_rendimento
                    && supplied != derived
                {
                    violations.push(Violation::BracketMismatch { supplied, derived });
                }
                bracket = Some(derived);
            }
            Err(_) => violations.push(Violation::NegativeIncome(income)),
        }
    }
    ResponsiblePerson {
        monthly_income: raw.renda_mensal,
        income_bracket: bracket,
    }
}

fn check_registered(
    registry: &CodeRegistry,
    field: &'static str,
    category: Category,
    code: &str,
    violations: &mut Vec<Violation>,
) {
    if !registry.contains(category, code) {
        violations.push(unknown_code(field, category, code));
    }
}

fn unknown_code(field: &'static str, category: Category, code: &str) -> Violation {
    Violation::UnknownCode {
        field,
        category,
        code: code.to_string(),
    }
}
