//! Wires control events to criteria extraction, matching and rendering.

use tracing::{debug, error, info, warn};

use crate::catalog::{CatalogLocation, CatalogStore, FetchError, FilterOptions};
use crate::criteria::{ControlValues, FilterCriteria};
use crate::matching::match_catalog;
use crate::render::{
    render_program_detail, render_results, DisplayFrame, DisplaySurface, Placeholder,
};

/// A change on one of the four controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlEvent {
    SearchInput(String),
    CountryChanged(String),
    TypeChanged(String),
    DegreeChanged(String),
}

/// Owns the loaded store, the current control values and the surface.
pub struct DirectoryController<S: DisplaySurface> {
    store: Option<CatalogStore>,
    controls: ControlValues,
    criteria: FilterCriteria,
    surface: S,
}

impl<S: DisplaySurface> DirectoryController<S> {
    pub fn new(surface: S) -> Self {
        Self::with_controls(surface, ControlValues::default())
    }

    /// Starts from pre-filled control values, as a page restored with inputs set.
    pub fn with_controls(surface: S, controls: ControlValues) -> Self {
        let criteria = FilterCriteria::from_controls(&controls);
        Self {
            store: None,
            controls,
            criteria,
            surface,
        }
    }

    /// Loads the catalog once and renders the first frame. A failed load shows
    /// the error placeholder and is returned so callers can set an exit status.
    pub async fn start(&mut self, location: &CatalogLocation) -> Result<(), FetchError> {
        match CatalogStore::load(location).await {
            Ok(store) => {
                self.attach(store);
                Ok(())
            }
            Err(err) => {
                error!(source = %location, error = %err, "could not load catalog");
                self.surface
                    .present(DisplayFrame::Placeholder(Placeholder::LoadFailed));
                Err(err)
            }
        }
    }

    /// Installs an already loaded store and renders.
    pub fn attach(&mut self, store: CatalogStore) {
        info!(
            institutions = store.len(),
            loaded_at = %store.loaded_at().to_rfc3339(),
            "directory ready"
        );
        self.store = Some(store);
        self.refresh();
    }

    pub fn handle(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::SearchInput(value) => self.controls.search = value,
            ControlEvent::CountryChanged(value) => self.controls.country = value,
            ControlEvent::TypeChanged(value) => self.controls.institution_type = value,
            ControlEvent::DegreeChanged(value) => self.controls.degree = value,
        }
        self.criteria = FilterCriteria::from_controls(&self.controls);

        if self.store.is_none() {
            debug!("control event ignored before catalog load");
            return;
        }
        self.refresh();
    }

    /// Opens the program detail modal. Unknown addresses are a silent no-op.
    pub fn open_program(&mut self, institution_id: &str, program_name: &str) {
        let Some(store) = &self.store else {
            debug!("detail request ignored before catalog load");
            return;
        };

        match store.find_program(institution_id, program_name) {
            Ok((institution, program)) => {
                let detail = render_program_detail(institution, program);
                self.surface.open_detail(detail);
            }
            Err(err) => warn!(error = %err, "program detail unavailable"),
        }
    }

    pub fn filter_options(&self) -> Option<FilterOptions> {
        self.store
            .as_ref()
            .map(|store| FilterOptions::from_catalog(store.institutions()))
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn controls(&self) -> &ControlValues {
        &self.controls
    }

    pub fn store(&self) -> Option<&CatalogStore> {
        self.store.as_ref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn refresh(&mut self) {
        let Some(store) = &self.store else {
            return;
        };

        let results = match_catalog(store.institutions(), &self.criteria);
        let frame = if results.is_empty() {
            DisplayFrame::Placeholder(Placeholder::NoResults)
        } else {
            DisplayFrame::Cards(render_results(&results))
        };
        debug!(cards = frame.cards().len(), "rendering frame");
        self.surface.present(frame);
    }
}
