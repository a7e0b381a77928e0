use censo_core::aggregate::{Bin, Stat, count, cross_tabulate, group_by, histogram, mean};
use censo_core::config::AgeBands;
use censo_core::models::types::Sex;

struct Person {
    sex: Sex,
    age: u32,
    income: Option<f64>,
}

fn person(sex: Sex, age: u32, income: Option<f64>) -> Person {
    Person { sex, age, income }
}

#[test]
fn count_of_the_empty_collection_is_zero() {
    let people: Vec<Person> = Vec::new();
    assert_eq!(count(&people), 0);
}

#[test]
fn mean_of_the_empty_collection_is_not_available() {
    let people: Vec<Person> = Vec::new();
    let outcome = mean(&people, |p| p.income);
    assert_eq!(outcome.stat, Stat::NotAvailable);
    assert_eq!(outcome.missing, 0);
}

#[test]
fn mean_distinguishes_no_data_from_measured_zero() {
    let all_missing = vec![person(Sex::Male, 30, None), person(Sex::Female, 40, None)];
    let outcome = mean(&all_missing, |p| p.income);
    assert_eq!(outcome.stat, Stat::NotAvailable);
    assert_eq!(outcome.missing, 2);

    let zeros = vec![person(Sex::Male, 30, Some(0.0))];
    assert_eq!(mean(&zeros, |p| p.income).stat, Stat::Value(0.0));
}

#[test]
fn mean_reports_the_missing_tally_alongside_the_value() {
    let people = vec![
        person(Sex::Male, 30, Some(1000.0)),
        person(Sex::Female, 40, None),
        person(Sex::Female, 50, Some(3000.0)),
    ];
    let outcome = mean(&people, |p| p.income);
    assert_eq!(outcome.stat, Stat::Value(2000.0));
    assert_eq!(outcome.missing, 1);
}

#[test]
fn histogram_bins_ages_4_5_and_61_with_nothing_excluded() {
    let people = vec![
        person(Sex::Male, 4, None),
        person(Sex::Female, 5, None),
        person(Sex::Male, 61, None),
    ];
    let bins = [
        Bin { lower: 0.0, upper: Some(5.0) },
        Bin { lower: 5.0, upper: Some(60.0) },
        Bin { lower: 60.0, upper: None },
    ];
    let result = histogram(&people, |p| Some(f64::from(p.age)), &bins);
    assert_eq!(result.counts, vec![1, 1, 1]);
    assert_eq!(result.excluded, 0);
    assert_eq!(result.missing, 0);
}

#[test]
fn histogram_reports_out_of_bin_values_instead_of_dropping_them() {
    let values = vec![Some(-3.0), Some(10.0), None, Some(250.0)];
    let bins = [Bin { lower: 0.0, upper: Some(100.0) }];
    let result = histogram(&values, |v| *v, &bins);
    assert_eq!(result.counts, vec![1]);
    assert_eq!(result.excluded, 2);
    assert_eq!(result.missing, 1);
}

#[test]
fn group_by_of_the_empty_collection_is_empty() {
    let people: Vec<Person> = Vec::new();
    assert!(group_by(&people, |p| p.sex).is_empty());
}

#[test]
fn group_by_keeps_input_order_within_each_group() {
    let people = vec![
        person(Sex::Male, 10, None),
        person(Sex::Female, 20, None),
        person(Sex::Male, 30, None),
    ];
    let groups = group_by(&people, |p| p.sex);
    let male_ages: Vec<u32> = groups[&Sex::Male].iter().map(|p| p.age).collect();
    assert_eq!(male_ages, vec![10, 30]);
}

#[test]
fn cross_tabulation_is_always_rectangular_over_the_full_domains() {
    let bands = AgeBands::default();
    let band_indices: Vec<usize> = (0..bands.len()).collect();
    let people: Vec<Person> = Vec::new();
    let crosstab = cross_tabulate(
        &people,
        &band_indices,
        &Sex::ALL,
        |p: &Person| bands.band_of(p.age),
        |p: &Person| Some(p.sex),
    );
    assert_eq!(crosstab.counts.len(), bands.len());
    assert!(crosstab.counts.iter().all(|row| row.len() == Sex::ALL.len()));
    assert!(crosstab.counts.iter().flatten().all(|&c| c == 0));
}

#[test]
fn sparse_input_fills_zero_cells_explicitly() {
    // Sexes [M, F, M, F] with ages [3, 3, 20, 70].
    let people = vec![
        person(Sex::Male, 3, None),
        person(Sex::Female, 3, None),
        person(Sex::Male, 20, None),
        person(Sex::Female, 70, None),
    ];
    let bands = AgeBands::default();
    let band_indices: Vec<usize> = (0..bands.len()).collect();
    let crosstab = cross_tabulate(
        &people,
        &band_indices,
        &Sex::ALL,
        |p: &Person| bands.band_of(p.age),
        |p: &Person| Some(p.sex),
    );
    // Band 0-4: one of each sex; 18-29: one male; 60+: one female.
    assert_eq!(crosstab.counts[0], vec![1, 1]);
    assert_eq!(crosstab.counts[3], vec![1, 0]);
    assert_eq!(crosstab.counts[5], vec![0, 1]);
    let total: usize = crosstab.counts.iter().flatten().sum();
    assert_eq!(total, 4);
    assert_eq!(crosstab.excluded, 0);
}

#[test]
fn records_outside_the_declared_domains_join_the_excluded_tally() {
    let bands = AgeBands::new(vec![18, 30]);
    let band_indices: Vec<usize> = (0..bands.len()).collect();
    let people = vec![person(Sex::Male, 10, None), person(Sex::Female, 40, None)];
    let crosstab = cross_tabulate(
        &people,
        &band_indices,
        &Sex::ALL,
        |p: &Person| bands.band_of(p.age),
        |p: &Person| Some(p.sex),
    );
    assert_eq!(crosstab.excluded, 1);
    assert_eq!(crosstab.counts[1], vec![0, 1]);
}
