use super::common::*;
use crate::criteria::FilterCriteria;
use crate::matching::{match_catalog, MatchFocus};

#[test]
fn unconstrained_criteria_return_full_catalog_in_institution_focus() {
    let catalog = catalog();
    let results = match_catalog(&catalog, &FilterCriteria::default());

    assert_eq!(results.len(), catalog.len());
    for (result, institution) in results.iter().zip(&catalog) {
        assert_eq!(result.institution.id, institution.id);
        assert_eq!(result.focus, MatchFocus::Institution);
        assert_eq!(result.programs.len(), institution.programs.len());
    }
}

#[test]
fn country_gate_is_case_insensitive_and_accepts_slugs() {
    let catalog = catalog();

    let results = match_catalog(&catalog, &FilterCriteria::default().with_country("TURKEY"));
    assert_eq!(ids(&results), vec!["alpha-u", "delta-academy"]);

    let results = match_catalog(
        &catalog,
        &FilterCriteria::default().with_country("united-kingdom"),
    );
    assert_eq!(ids(&results), vec!["gamma-institute"]);
}

#[test]
fn gated_institutions_never_appear_whatever_the_search() {
    let catalog = catalog();
    let criteria = FilterCriteria::default()
        .with_type("private")
        .with_search("data");

    let results = match_catalog(&catalog, &criteria);

    assert!(results
        .iter()
        .all(|result| result.institution.kind.key() == "private"));
    assert!(!ids(&results).contains(&"alpha-u".to_string()));
    assert!(!ids(&results).contains(&"gamma-institute".to_string()));
}

#[test]
fn type_and_country_gates_combine() {
    let catalog = catalog();
    let criteria = FilterCriteria::default()
        .with_country("turkey")
        .with_type("private");

    let results = match_catalog(&catalog, &criteria);

    assert_eq!(ids(&results), vec!["delta-academy"]);
    assert!(results[0].programs.is_empty());
    assert_eq!(results[0].focus, MatchFocus::Institution);
}
