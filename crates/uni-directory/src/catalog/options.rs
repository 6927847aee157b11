use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use super::domain::Institution;
use super::normalize::{capitalize_first, normalize_key, slugify};

/// One selectable entry of a country, type or degree control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionEntry {
    pub value: String,
    pub label: String,
}

/// Choices offered by the three selection controls, derived from the catalog.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FilterOptions {
    pub countries: Vec<OptionEntry>,
    pub types: Vec<OptionEntry>,
    pub degrees: Vec<OptionEntry>,
    /// Country slug to the institution types present in that country.
    pub types_by_country: BTreeMap<String, Vec<String>>,
}

impl FilterOptions {
    pub fn from_catalog(institutions: &[Institution]) -> Self {
        let mut countries: BTreeMap<String, String> = BTreeMap::new();
        let mut types: BTreeSet<String> = BTreeSet::new();
        let mut degrees: BTreeSet<String> = BTreeSet::new();
        let mut types_by_country: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        for institution in institutions {
            let country = institution.country.trim();
            if !country.is_empty() {
                countries
                    .entry(normalize_key(country))
                    .or_insert_with(|| country.to_string());
            }

            let kind = institution.kind.key();
            if !kind.is_empty() {
                types.insert(kind.clone());
                types_by_country
                    .entry(slugify(country))
                    .or_default()
                    .insert(kind);
            }

            degrees.extend(
                institution
                    .programs
                    .iter()
                    .map(|program| program.degree_key())
                    .filter(|degree| !degree.is_empty()),
            );
        }

        Self {
            countries: countries
                .into_iter()
                .map(|(value, label)| OptionEntry { value, label })
                .collect(),
            types: types.into_iter().map(labelled).collect(),
            degrees: degrees.into_iter().map(labelled).collect(),
            types_by_country: types_by_country
                .into_iter()
                .map(|(country, kinds)| (country, kinds.into_iter().collect()))
                .collect(),
        }
    }
}

fn labelled(value: String) -> OptionEntry {
    let label = capitalize_first(&value);
    OptionEntry { value, label }
}
