//! University directory: catalog loading, filtering and card rendering.
//!
//! The catalog is loaded once into a [`catalog::CatalogStore`]; every control
//! change re-derives [`criteria::FilterCriteria`], runs the match engine and
//! hands fresh card view-models to a [`render::DisplaySurface`].

pub mod catalog;
pub mod config;
pub mod controller;
pub mod criteria;
pub mod error;
pub mod ingest;
pub mod matching;
pub mod render;
pub mod telemetry;
