//! Report assembler: fixed, named, chart-ready result sets.
//!
//! Each report pairs ordered category axes with a numeric series or
//! matrix aligned to those axes, plus explicit missing/excluded
//! tallies. The structures here are the contract handed to a rendering
//! collaborator; this layer never produces markup or pixels.

pub mod format;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::aggregate::{self, MeanOutcome, cross_tabulate, group_by};
use crate::config::CensusConfig;
use crate::models::types::Sex;
use crate::models::{CensusSnapshot, Resident};
use crate::registry::{Category, CodeRegistry};

/// Label of the bucket collecting codes the registry cannot decode
pub const UNRECOGNIZED_BUCKET: &str = "não reconhecido";

/// Headline figures for the dashboard's KPI panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiPanel {
    /// Total number of dwellings
    pub total_dwellings: usize,
    /// Total dwellings, locale-formatted
    pub total_dwellings_display: String,
    /// Mean age of responsible persons, with its missing tally
    pub mean_responsible_age: MeanOutcome,
    /// Mean responsible-person age, locale-formatted or the n/a marker
    pub mean_responsible_age_display: String,
    /// Mean monthly household income, with its missing tally
    pub mean_household_income: MeanOutcome,
    /// Mean household income as currency, or the n/a marker
    pub mean_household_income_display: String,
}

/// One count series of an age pyramid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PyramidSeries {
    /// Sex this series counts
    pub sex: Sex,
    /// Counts aligned with the pyramid's age-band axis
    pub counts: Vec<usize>,
}

/// Age-band × sex cross-tabulation, one series per sex
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgePyramid {
    /// Ordered age-band labels, youngest first
    pub bands: Vec<String>,
    /// One series per sex, aligned on the shared band axis
    pub series: Vec<PyramidSeries>,
    /// Residents outside the configured band partition
    pub excluded: usize,
}

/// Resident counts per region present in the input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalDistribution {
    /// UF codes present in the input, sorted ascending
    pub regions: Vec<String>,
    /// Resident count per region, aligned with `regions`
    pub counts: Vec<usize>,
}

/// One labeled slice of an infrastructure breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownBucket {
    /// Raw code, absent for the unrecognized bucket
    pub code: Option<String>,
    /// Label resolved through the registry, or [`UNRECOGNIZED_BUCKET`]
    pub label: String,
    /// Dwellings in this bucket
    pub count: usize,
}

/// Infrastructure field selectable for a breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InfrastructureField {
    /// Water supply (item 3.01)
    WaterSupply,
    /// Sewage destination (item 3.07)
    SewageDestination,
    /// Garbage collection (item 3.09)
    GarbageCollection,
}

impl InfrastructureField {
    fn category(self) -> Category {
        match self {
            Self::WaterSupply => Category::WaterSupply,
            Self::SewageDestination => Category::SewageDestination,
            Self::GarbageCollection => Category::GarbageCollection,
        }
    }

    fn code_of(self, dwelling: &crate::models::Dwelling) -> &str {
        match self {
            Self::WaterSupply => &dwelling.water_supply,
            Self::SewageDestination => &dwelling.sewage_destination,
            Self::GarbageCollection => &dwelling.garbage_collection,
        }
    }
}

/// Dwelling counts per infrastructure category label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfrastructureBreakdown {
    /// Which infrastructure field was broken down
    pub field: InfrastructureField,
    /// Labeled buckets sorted by code, unrecognized codes last
    pub buckets: Vec<BreakdownBucket>,
}

/// All four reports assembled from one snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CensusReport {
    /// Headline KPI figures
    pub kpi: KpiPanel,
    /// Age-band × sex pyramid
    pub pyramid: AgePyramid,
    /// Residents per UF
    pub regional: RegionalDistribution,
    /// Water-supply breakdown
    pub infrastructure: InfrastructureBreakdown,
}

/// Assemble every report from a single consistent snapshot.
#[must_use]
pub fn assemble(
    snapshot: &CensusSnapshot,
    registry: &CodeRegistry,
    config: &CensusConfig,
) -> CensusReport {
    CensusReport {
        kpi: kpi_panel(snapshot, config),
        pyramid: age_pyramid(snapshot, config),
        regional: regional_distribution(snapshot),
        infrastructure: infrastructure_breakdown(
            snapshot,
            registry,
            InfrastructureField::WaterSupply,
        ),
    }
}

/// Total dwellings, mean responsible-person age and mean household
/// income, each with a locale-formatted display string.
///
/// A statistic with no contributing records renders the locale's
/// not-available marker, never a blank or a zero; the missing tallies
/// travel with the raw outcomes so the panel can expose them.
#[must_use]
pub fn kpi_panel(snapshot: &CensusSnapshot, config: &CensusConfig) -> KpiPanel {
    let locale = &config.locale;
    let responsible = snapshot.responsible_persons();
    let mean_age = aggregate::mean(&responsible, |r| Some(f64::from(r.age)));
    let mean_income = aggregate::mean(&responsible, |r| r.monthly_income());
    KpiPanel {
        total_dwellings: snapshot.dwelling_count(),
        total_dwellings_display: locale.format_count(snapshot.dwelling_count()),
        mean_responsible_age: mean_age,
        mean_responsible_age_display: locale.format_stat(mean_age.stat, 1),
        mean_household_income: mean_income,
        mean_household_income_display: locale.format_currency_stat(mean_income.stat),
    }
}

/// Cross-tabulate residents over the configured age bands and both
/// sexes, one aligned count series per sex.
#[must_use]
pub fn age_pyramid(snapshot: &CensusSnapshot, config: &CensusConfig) -> AgePyramid {
    let bands = &config.age_bands;
    let residents = snapshot.residents();
    let band_indices: Vec<usize> = (0..bands.len()).collect();
    let crosstab = cross_tabulate(
        &residents,
        &band_indices,
        &Sex::ALL,
        |r: &&Resident| r.age_band(bands),
        |r: &&Resident| Some(r.sex),
    );
    let series = Sex::ALL
        .iter()
        .enumerate()
        .map(|(col, &sex)| PyramidSeries {
            sex,
            counts: crosstab.column(col),
        })
        .collect();
    AgePyramid {
        bands: bands.labels(),
        series,
        excluded: crosstab.excluded,
    }
}

/// Resident counts per UF, restricted to regions present in the input.
#[must_use]
pub fn regional_distribution(snapshot: &CensusSnapshot) -> RegionalDistribution {
    let residents: Vec<(&str, &Resident)> = snapshot
        .dwellings()
        .iter()
        .flat_map(|d| d.residents.iter().map(move |r| (d.uf.as_str(), r)))
        .collect();
    let groups = group_by(&residents, |(uf, _)| *uf);
    let (regions, counts): (Vec<String>, Vec<usize>) = groups
        .into_iter()
        .sorted_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(uf, members)| (uf.to_string(), members.len()))
        .unzip();
    RegionalDistribution { regions, counts }
}

/// Share of literate residents among those old enough to be asked.
///
/// Residents under the literacy age are not eligible and stay out of
/// both the ratio and the missing tally; eligible residents without an
/// answer are counted as missing.
#[must_use]
pub fn literacy_rate(snapshot: &CensusSnapshot) -> MeanOutcome {
    let eligible: Vec<&Resident> = snapshot
        .residents()
        .into_iter()
        .filter(|r| r.age >= crate::config::LITERACY_AGE_THRESHOLD)
        .collect();
    aggregate::mean(&eligible, |r| {
        r.literate.map(|flag| if flag { 1.0 } else { 0.0 })
    })
}

/// Dwelling counts per infrastructure code, labels resolved through the
/// registry.
///
/// Codes the registry cannot decode are not dropped: they fold into a
/// single [`UNRECOGNIZED_BUCKET`] entry. The same condition is a hard
/// validation error at ingestion; here it is downgraded so one stray
/// code cannot abort report generation.
#[must_use]
pub fn infrastructure_breakdown(
    snapshot: &CensusSnapshot,
    registry: &CodeRegistry,
    field: InfrastructureField,
) -> InfrastructureBreakdown {
    let category = field.category();
    let groups = group_by(snapshot.dwellings(), |d| field.code_of(d).to_string());
    let mut buckets = Vec::with_capacity(groups.len());
    let mut unrecognized = 0usize;
    for (code, members) in groups.into_iter().sorted_by(|(a, _), (b, _)| a.cmp(b)) {
        match registry.decode(category, &code) {
            Ok(label) => buckets.push(BreakdownBucket {
                code: Some(code),
                label: label.to_string(),
                count: members.len(),
            }),
            Err(_) => {
                log::warn!("unrecognized {category} code {code:?} in {} dwellings", members.len());
                unrecognized += members.len();
            }
        }
    }
    if unrecognized > 0 {
        buckets.push(BreakdownBucket {
            code: None,
            label: UNRECOGNIZED_BUCKET.to_string(),
            count: unrecognized,
        });
    }
    InfrastructureBreakdown { field, buckets }
}
