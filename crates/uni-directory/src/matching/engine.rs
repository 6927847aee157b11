use tracing::debug;

use super::ordering::sort_programs;
use super::{MatchFocus, MatchResult};
use crate::catalog::{slugify, Institution, Program};
use crate::criteria::FilterCriteria;

/// Runs the full match over the catalog. Institution order follows the
/// catalog; the result is a pure function of its inputs.
pub fn match_catalog<'a>(
    institutions: &'a [Institution],
    criteria: &FilterCriteria,
) -> Vec<MatchResult<'a>> {
    let gated: Vec<&Institution> = institutions
        .iter()
        .filter(|institution| passes_gate(institution, criteria))
        .collect();

    let focus = classify(&gated, criteria);

    let results: Vec<MatchResult<'a>> = gated
        .into_iter()
        .filter_map(|institution| shape(institution, criteria, focus))
        .collect();

    debug!(
        focus = focus.label(),
        excluded = institutions.len() - results.len(),
        matched = results.len(),
        "catalog filtered"
    );

    results
}

fn passes_gate(institution: &Institution, criteria: &FilterCriteria) -> bool {
    let country_ok = match criteria.country() {
        None => true,
        Some(country) => {
            institution.country_key() == country || slugify(&institution.country) == country
        }
    };
    let type_ok = match criteria.institution_type() {
        None => true,
        Some(kind) => institution.kind.key() == kind,
    };
    country_ok && type_ok
}

fn classify(gated: &[&Institution], criteria: &FilterCriteria) -> MatchFocus {
    if criteria.degree().is_some() {
        return MatchFocus::Program;
    }

    let program_name_hit = criteria.search().is_some_and(|term| {
        gated.iter().any(|institution| {
            institution
                .programs
                .iter()
                .any(|program| contains(&program.name, term))
        })
    });

    if program_name_hit {
        MatchFocus::Program
    } else {
        MatchFocus::Institution
    }
}

fn shape<'a>(
    institution: &'a Institution,
    criteria: &FilterCriteria,
    focus: MatchFocus,
) -> Option<MatchResult<'a>> {
    let mut programs: Vec<&'a Program> = match focus {
        MatchFocus::Program => {
            let institution_hit = criteria
                .search()
                .is_some_and(|term| institution_text_matches(institution, term));
            let qualifying: Vec<&'a Program> = institution
                .programs
                .iter()
                .filter(|program| qualifies(program, institution_hit, criteria))
                .collect();
            if qualifying.is_empty() {
                return None;
            }
            qualifying
        }
        MatchFocus::Institution => {
            if let Some(term) = criteria.search() {
                if !institution_text_matches(institution, term) {
                    return None;
                }
            }
            institution.programs.iter().collect()
        }
    };

    sort_programs(&mut programs);

    Some(MatchResult {
        institution,
        programs,
        focus,
    })
}

fn qualifies(program: &Program, institution_hit: bool, criteria: &FilterCriteria) -> bool {
    let matches_search = match criteria.search() {
        None => true,
        Some(term) => institution_hit || contains(&program.name, term),
    };
    let matches_degree = match criteria.degree() {
        None => true,
        Some(degree) => program.degree_key() == degree,
    };
    matches_search && matches_degree
}

fn institution_text_matches(institution: &Institution, term: &str) -> bool {
    contains(&institution.name, term) || contains(&institution.description, term)
}

/// `term` is already lower-cased by criteria extraction.
fn contains(haystack: &str, term: &str) -> bool {
    haystack.to_lowercase().contains(term)
}
