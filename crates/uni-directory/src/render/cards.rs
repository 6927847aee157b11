use std::collections::BTreeSet;

use super::views::{CardView, ProgramDetailView, ProgramEntryView, ProgramKey};
use crate::catalog::{capitalize_first, Institution, Program};
use crate::matching::{MatchFocus, MatchResult};

pub fn render_results(results: &[MatchResult<'_>]) -> Vec<CardView> {
    results.iter().map(render_card).collect()
}

/// Header fields pass through; program entries are pre-expanded only for
/// program-focused results.
pub fn render_card(result: &MatchResult<'_>) -> CardView {
    let institution = result.institution;
    let expanded = result.is_program_focused();

    let degree_badges = match result.focus {
        MatchFocus::Institution => degree_badges(institution.programs.iter()),
        MatchFocus::Program => degree_badges(result.programs.iter().copied()),
    };

    let programs = result
        .programs
        .iter()
        .map(|program| ProgramEntryView {
            key: program_key(institution, program),
            name: program.name.clone(),
            degree_label: capitalize_first(&program.degree_key()),
            duration: program.duration.clone(),
            language: program.language.clone(),
            tuition: program.tuition.clone(),
            priority: program.priority,
            expanded,
        })
        .collect();

    CardView {
        institution_id: institution.id.clone(),
        name: institution.name.clone(),
        country: institution.country.clone(),
        type_label: capitalize_first(&institution.kind.to_string()),
        description: institution.description.clone(),
        logo: institution.logo.clone(),
        url: institution.url.clone(),
        focus: result.focus,
        degree_badges,
        programs,
    }
}

/// De-duplicated, lower-cased degrees sorted alphabetically, capitalized for display.
pub fn degree_badges<'a>(programs: impl Iterator<Item = &'a Program>) -> Vec<String> {
    programs
        .map(Program::degree_key)
        .filter(|degree| !degree.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(|degree| capitalize_first(&degree))
        .collect()
}

pub fn render_program_detail(institution: &Institution, program: &Program) -> ProgramDetailView {
    ProgramDetailView {
        key: program_key(institution, program),
        institution_name: institution.name.clone(),
        institution_url: institution.url.clone(),
        name: program.name.clone(),
        degree_label: capitalize_first(&program.degree_key()),
        overview: program.overview.clone(),
        duration: program.duration.clone(),
        language: program.language.clone(),
        admission_requirements: program.admission_requirements.clone(),
        tuition: program.tuition.clone(),
    }
}

fn program_key(institution: &Institution, program: &Program) -> ProgramKey {
    ProgramKey {
        institution_id: institution.id.clone(),
        program_name: program.name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::FilterCriteria;
    use crate::matching::match_catalog;
    use serde_json::json;

    fn catalog() -> Vec<Institution> {
        serde_json::from_value(json!([{
            "id": "alpha-u",
            "name": "Alpha U",
            "country": "Turkey",
            "type": "public",
            "url": "https://alpha.example",
            "programs": [
                { "name": "Data Science", "degree": "Master", "priority": 1, "overview": "Stats and ML." },
                { "name": "Art History", "degree": "bachelor" },
                { "name": "Statistics", "degree": "master" }
            ]
        }]))
        .expect("catalog parses")
    }

    #[test]
    fn institution_focus_badges_cover_full_program_list() {
        let catalog = catalog();
        let results = match_catalog(&catalog, &FilterCriteria::default());
        let card = render_card(&results[0]);

        assert_eq!(card.type_label, "Public");
        assert_eq!(card.degree_badges, vec!["Bachelor", "Master"]);
        assert_eq!(card.degrees_text(), "Bachelor, Master");
        assert!(card.programs.iter().all(|entry| !entry.expanded));
    }

    #[test]
    fn program_focus_entries_are_expanded() {
        let catalog = catalog();
        let results = match_catalog(&catalog, &FilterCriteria::default().with_degree("master"));
        let card = render_card(&results[0]);

        assert_eq!(card.degree_badges, vec!["Master"]);
        let names: Vec<&str> = card.programs.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Data Science", "Statistics"]);
        assert!(card.programs.iter().all(|entry| entry.expanded));
        assert_eq!(card.programs[0].key.institution_id, "alpha-u");
    }

    #[test]
    fn card_without_degrees_reads_not_available() {
        let institution = Institution {
            programs: Vec::new(),
            ..catalog().remove(0)
        };
        let catalog = vec![institution];
        let results = match_catalog(&catalog, &FilterCriteria::default());
        assert_eq!(render_card(&results[0]).degrees_text(), "N/A");
    }

    #[test]
    fn detail_view_carries_overview_and_key() {
        let catalog = catalog();
        let detail = render_program_detail(&catalog[0], &catalog[0].programs[0]);
        assert_eq!(detail.degree_label, "Master");
        assert_eq!(detail.overview, "Stats and ML.");
        assert_eq!(detail.key.program_name, "Data Science");
        assert_eq!(detail.institution_url, "https://alpha.example");
    }
}
