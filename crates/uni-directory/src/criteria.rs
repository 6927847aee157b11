//! Filter criteria read from the four browser controls.

use serde::{Deserialize, Serialize};

use crate::catalog::normalize_key;

/// Raw values currently held by the search box and the three selections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlValues {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub country: String,
    #[serde(default, rename = "type")]
    pub institution_type: String,
    #[serde(default)]
    pub degree: String,
}

/// Normalized criteria. `None` means the dimension is unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    search: Option<String>,
    country: Option<String>,
    institution_type: Option<String>,
    degree: Option<String>,
}

impl FilterCriteria {
    pub fn from_controls(controls: &ControlValues) -> Self {
        Self {
            search: search_term(&controls.search),
            country: selection(&controls.country),
            institution_type: selection(&controls.institution_type),
            degree: selection(&controls.degree),
        }
    }

    pub fn with_search(mut self, term: &str) -> Self {
        self.search = search_term(term);
        self
    }

    pub fn with_country(mut self, country: &str) -> Self {
        self.country = selection(country);
        self
    }

    pub fn with_type(mut self, institution_type: &str) -> Self {
        self.institution_type = selection(institution_type);
        self
    }

    pub fn with_degree(mut self, degree: &str) -> Self {
        self.degree = selection(degree);
        self
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn institution_type(&self) -> Option<&str> {
        self.institution_type.as_deref()
    }

    pub fn degree(&self) -> Option<&str> {
        self.degree.as_deref()
    }

    pub fn is_unconstrained(&self) -> bool {
        self.search.is_none()
            && self.country.is_none()
            && self.institution_type.is_none()
            && self.degree.is_none()
    }
}

fn search_term(raw: &str) -> Option<String> {
    let term = normalize_key(raw);
    (!term.is_empty()).then_some(term)
}

fn selection(raw: &str) -> Option<String> {
    let value = normalize_key(raw);
    match value.as_str() {
        "" | "all" => None,
        _ => Some(value),
    }
}
