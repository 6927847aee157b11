use serde::Serialize;

use super::views::{CardView, ProgramDetailView};

/// Single message shown in place of the card list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Placeholder {
    LoadFailed,
    NoResults,
}

impl Placeholder {
    pub const fn message(self) -> &'static str {
        match self {
            Self::LoadFailed => "Failed to load universities. Please try again later.",
            Self::NoResults => "No universities found matching your criteria.",
        }
    }
}

/// Everything the surface shows at once. Each frame replaces the previous one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum DisplayFrame {
    Cards(Vec<CardView>),
    Placeholder(Placeholder),
}

impl DisplayFrame {
    pub fn cards(&self) -> &[CardView] {
        match self {
            Self::Cards(cards) => cards,
            Self::Placeholder(_) => &[],
        }
    }

    pub fn placeholder(&self) -> Option<Placeholder> {
        match self {
            Self::Cards(_) => None,
            Self::Placeholder(placeholder) => Some(*placeholder),
        }
    }
}

/// Target the controller renders into.
pub trait DisplaySurface {
    fn present(&mut self, frame: DisplayFrame);

    /// Shows one program's full detail. Surfaces without a modal ignore it.
    fn open_detail(&mut self, _detail: ProgramDetailView) {}
}
