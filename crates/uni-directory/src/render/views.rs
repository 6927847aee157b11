use serde::Serialize;

use crate::matching::MatchFocus;

/// Address of a program detail: institution id plus program name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProgramKey {
    pub institution_id: String,
    pub program_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgramEntryView {
    pub key: ProgramKey,
    pub name: String,
    pub degree_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub language: String,
    pub tuition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    pub expanded: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub institution_id: String,
    pub name: String,
    pub country: String,
    pub type_label: String,
    pub description: String,
    pub logo: String,
    pub url: String,
    pub focus: MatchFocus,
    pub degree_badges: Vec<String>,
    pub programs: Vec<ProgramEntryView>,
}

impl CardView {
    pub fn degrees_text(&self) -> String {
        if self.degree_badges.is_empty() {
            "N/A".to_string()
        } else {
            self.degree_badges.join(", ")
        }
    }
}

/// Full detail of one program, shown in the modal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgramDetailView {
    pub key: ProgramKey,
    pub institution_name: String,
    pub institution_url: String,
    pub name: String,
    pub degree_label: String,
    pub overview: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub language: String,
    pub admission_requirements: String,
    pub tuition: String,
}
