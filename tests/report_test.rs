use censo_core::models::types::{ConstructionType, DwellingSpecies, RaceColor, Sex};
use censo_core::models::{CensusSnapshot, Dwelling, Resident, ResponsiblePerson};
use censo_core::registry::CodeRegistry;
use censo_core::report::{
    InfrastructureField, UNRECOGNIZED_BUCKET, age_pyramid, assemble, infrastructure_breakdown,
    kpi_panel, regional_distribution,
};
use censo_core::{CensusConfig, Stat};

fn resident(name: &str, sex: Sex, age: u32, income: Option<f64>) -> Resident {
    Resident {
        given_name: name.to_string(),
        surname: "Teste".to_string(),
        sex,
        birth_date: None,
        age,
        relationship: if income.is_some() { "01" } else { "04" }.to_string(),
        race_color: RaceColor::Mixed,
        considers_indigenous: None,
        indigenous_ethnicity: None,
        speaks_indigenous_language: None,
        literate: if age >= 5 { Some(true) } else { None },
        responsible: income.map(|renda| ResponsiblePerson {
            monthly_income: Some(renda),
            income_bracket: Some('4'),
        }),
    }
}

fn dwelling(id: &str, uf: &str, water: &str, residents: Vec<Resident>) -> Dwelling {
    Dwelling {
        id: id.to_string(),
        uf: uf.to_string(),
        municipio: "Cidade".to_string(),
        species: DwellingSpecies::PermanentPrivate,
        construction: ConstructionType::House,
        water_supply: water.to_string(),
        bathrooms: 1,
        sewage_destination: "1".to_string(),
        garbage_collection: "1".to_string(),
        residents,
        deceased: Vec::new(),
    }
}

fn sample_snapshot() -> CensusSnapshot {
    CensusSnapshot::from_dwellings(vec![
        dwelling(
            "D1",
            "SP",
            "1",
            vec![
                resident("Ana", Sex::Female, 34, Some(2500.0)),
                resident("Bia", Sex::Female, 3, None),
                resident("Caio", Sex::Male, 3, None),
            ],
        ),
        dwelling(
            "D2",
            "MG",
            "1",
            vec![
                resident("Davi", Sex::Male, 40, Some(3500.0)),
                resident("Eva", Sex::Female, 70, None),
            ],
        ),
    ])
}

#[test]
fn kpi_panel_formats_with_the_locale() {
    let config = CensusConfig::default();
    let panel = kpi_panel(&sample_snapshot(), &config);
    assert_eq!(panel.total_dwellings, 2);
    assert_eq!(panel.total_dwellings_display, "2");
    assert_eq!(panel.mean_responsible_age.stat, Stat::Value(37.0));
    assert_eq!(panel.mean_responsible_age_display, "37,0");
    assert_eq!(panel.mean_household_income.stat, Stat::Value(3000.0));
    assert_eq!(panel.mean_household_income_display, "R$ 3.000,00");
    assert_eq!(panel.mean_household_income.missing, 0);
}

#[test]
fn kpi_panel_renders_the_marker_when_no_data_contributes() {
    let config = CensusConfig::default();
    let empty = CensusSnapshot::new();
    let panel = kpi_panel(&empty, &config);
    assert_eq!(panel.total_dwellings_display, "0");
    assert_eq!(panel.mean_responsible_age.stat, Stat::NotAvailable);
    assert_eq!(panel.mean_responsible_age_display, "n/d");
    assert_eq!(panel.mean_household_income_display, "n/d");
}

#[test]
fn kpi_panel_exposes_the_missing_income_tally() {
    let config = CensusConfig::default();
    let snapshot = CensusSnapshot::from_dwellings(vec![
        dwelling("D1", "SP", "1", vec![resident("Ana", Sex::Female, 34, Some(2500.0))]),
        dwelling(
            "D2",
            "SP",
            "1",
            vec![Resident {
                responsible: Some(ResponsiblePerson {
                    monthly_income: None,
                    income_bracket: Some('2'),
                }),
                ..resident("Davi", Sex::Male, 51, None)
            }],
        ),
    ]);
    let panel = kpi_panel(&snapshot, &config);
    assert_eq!(panel.mean_household_income.stat, Stat::Value(2500.0));
    assert_eq!(panel.mean_household_income.missing, 1);
}

#[test]
fn age_pyramid_has_one_aligned_series_per_sex() {
    let config = CensusConfig::default();
    let pyramid = age_pyramid(&sample_snapshot(), &config);
    assert_eq!(
        pyramid.bands,
        vec!["0-4", "5-11", "12-17", "18-29", "30-59", "60+"]
    );
    assert_eq!(pyramid.series.len(), 2);
    let male = &pyramid.series[0];
    let female = &pyramid.series[1];
    assert_eq!(male.sex, Sex::Male);
    assert_eq!(male.counts, vec![1, 0, 0, 0, 1, 0]);
    assert_eq!(female.sex, Sex::Female);
    assert_eq!(female.counts, vec![1, 0, 0, 0, 1, 1]);
    assert_eq!(pyramid.excluded, 0);
}

#[test]
fn regional_distribution_is_limited_to_regions_present() {
    let distribution = regional_distribution(&sample_snapshot());
    assert_eq!(distribution.regions, vec!["MG", "SP"]);
    assert_eq!(distribution.counts, vec![2, 3]);
}

#[test]
fn unrecognized_water_codes_land_in_an_explicit_bucket() {
    let _ = env_logger::builder().is_test(true).try_init();
    let registry = CodeRegistry::with_default_tables();
    let snapshot = CensusSnapshot::from_dwellings(vec![
        dwelling("D1", "SP", "1", Vec::new()),
        dwelling("D2", "SP", "9", Vec::new()),
    ]);
    let breakdown = infrastructure_breakdown(&snapshot, &registry, InfrastructureField::WaterSupply);
    assert_eq!(breakdown.buckets.len(), 2);
    assert_eq!(breakdown.buckets[0].label, "Rede geral de distribuição");
    assert_eq!(breakdown.buckets[0].count, 1);
    assert_eq!(breakdown.buckets[1].label, UNRECOGNIZED_BUCKET);
    assert_eq!(breakdown.buckets[1].code, None);
    assert_eq!(breakdown.buckets[1].count, 1);
}

#[test]
fn assembled_reports_come_from_one_consistent_snapshot() {
    let registry = CodeRegistry::with_default_tables();
    let config = CensusConfig::default();
    let snapshot = sample_snapshot();
    let report = assemble(&snapshot, &registry, &config);
    let residents_in_pyramid: usize = report
        .pyramid
        .series
        .iter()
        .flat_map(|s| s.counts.iter())
        .sum();
    let residents_in_regions: usize = report.regional.counts.iter().sum();
    assert_eq!(residents_in_pyramid + report.pyramid.excluded, residents_in_regions);
    assert_eq!(report.kpi.total_dwellings, snapshot.dwelling_count());
}

#[test]
fn region_filter_restricts_every_downstream_report() {
    let config = CensusConfig::default();
    let filtered = sample_snapshot().filter_regions(&["SP"]);
    assert_eq!(filtered.dwelling_count(), 1);
    let distribution = regional_distribution(&filtered);
    assert_eq!(distribution.regions, vec!["SP"]);
    let panel = kpi_panel(&filtered, &config);
    assert_eq!(panel.mean_responsible_age.stat, Stat::Value(34.0));
}

#[test]
fn max_age_filter_drops_older_residents_but_keeps_dwellings() {
    let filtered = sample_snapshot().filter_max_age(30);
    assert_eq!(filtered.dwelling_count(), 2);
    assert_eq!(filtered.residents().len(), 2);
    assert!(filtered.residents().iter().all(|r| r.age <= 30));
}

#[test]
fn removing_a_dwelling_cascades_to_its_dependents() {
    let mut dwellings = sample_snapshot().dwellings().to_vec();
    dwellings[0].deceased.push(censo_core::DeceasedRecord {
        name: "Zé".to_string(),
        date_of_death: chrono::NaiveDate::from_ymd_opt(2021, 5, 2).unwrap(),
        age_at_death: 88,
    });
    let mut snapshot = CensusSnapshot::from_dwellings(dwellings);
    assert_eq!(snapshot.residents().len(), 5);
    assert_eq!(snapshot.deceased().len(), 1);
    assert!(snapshot.remove_dwelling("D1"));
    assert_eq!(snapshot.dwelling_count(), 1);
    assert_eq!(snapshot.residents().len(), 2);
    assert!(snapshot.deceased().is_empty());
    assert!(!snapshot.remove_dwelling("D1"));
}

#[test]
fn literacy_rate_skips_ineligible_residents_and_tallies_missing() {
    use censo_core::report::literacy_rate;
    let snapshot = CensusSnapshot::from_dwellings(vec![dwelling(
        "D1",
        "SP",
        "1",
        vec![
            resident("Ana", Sex::Female, 34, None),   // literate
            resident("Bia", Sex::Female, 3, None),    // under threshold, no flag
            Resident {
                literate: None,
                ..resident("Cid", Sex::Male, 80, None)
            },
            Resident {
                literate: Some(false),
                ..resident("Davi", Sex::Male, 9, None)
            },
        ],
    )]);
    let outcome = literacy_rate(&snapshot);
    assert_eq!(outcome.stat, Stat::Value(0.5));
    assert_eq!(outcome.missing, 1);
}

#[test]
fn reports_serialize_for_the_chart_layer() {
    let registry = CodeRegistry::with_default_tables();
    let config = CensusConfig::default();
    let report = assemble(&sample_snapshot(), &registry, &config);
    let json = serde_json::to_value(&report).unwrap();
    assert!(json["pyramid"]["bands"].is_array());
    assert_eq!(json["kpi"]["total_dwellings"], 2);
}
