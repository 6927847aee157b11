//! Card view-models and the surfaces that display them.

mod cards;
mod html;
mod surface;
pub mod views;

pub use cards::{degree_badges, render_card, render_program_detail, render_results};
pub use html::HtmlSurface;
pub use surface::{DisplayFrame, DisplaySurface, Placeholder};
pub use views::{CardView, ProgramDetailView, ProgramEntryView, ProgramKey};
