//! The filter/match engine: decides which institutions and which of their
//! programs qualify for a set of criteria, and in which focus they render.

mod engine;
mod ordering;

#[cfg(test)]
mod tests;

use serde::Serialize;

use crate::catalog::{Institution, Program};

pub use engine::match_catalog;
pub use ordering::compare_programs;

/// Whether a result renders with expanded program details or as a general card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchFocus {
    Program,
    Institution,
}

impl MatchFocus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Program => "Program-focused",
            Self::Institution => "Institution-focused",
        }
    }
}

/// One institution that survived filtering, with the programs to show.
///
/// `programs` is always drawn from `institution.programs`; its order only
/// differs from the catalog order by the priority sort.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult<'a> {
    pub institution: &'a Institution,
    pub programs: Vec<&'a Program>,
    pub focus: MatchFocus,
}

impl MatchResult<'_> {
    pub fn is_program_focused(&self) -> bool {
        self.focus == MatchFocus::Program
    }

    pub fn program_names(&self) -> Vec<&str> {
        self.programs
            .iter()
            .map(|program| program.name.as_str())
            .collect()
    }
}
