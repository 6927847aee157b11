use chrono::{DateTime, Utc};
use tracing::info;

use super::domain::{Institution, Program};
use super::source::{CatalogLocation, FetchError, ParseError};

/// Read-only holder of the loaded catalog.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    institutions: Vec<Institution>,
    loaded_at: DateTime<Utc>,
}

impl CatalogStore {
    /// Reads the catalog once. Failures are surfaced as-is; there is no retry.
    pub async fn load(location: &CatalogLocation) -> Result<Self, FetchError> {
        let body = location.fetch().await?;
        let store = Self::from_slice(&body)?;
        info!(
            source = %location,
            institutions = store.len(),
            programs = store.program_count(),
            "catalog loaded"
        );
        Ok(store)
    }

    pub fn from_slice(body: &[u8]) -> Result<Self, ParseError> {
        let institutions: Vec<Institution> = serde_json::from_slice(body)?;
        Ok(Self::from_institutions(institutions))
    }

    pub fn from_institutions(institutions: Vec<Institution>) -> Self {
        Self {
            institutions,
            loaded_at: Utc::now(),
        }
    }

    pub fn institutions(&self) -> &[Institution] {
        &self.institutions
    }

    pub fn len(&self) -> usize {
        self.institutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.institutions.is_empty()
    }

    pub fn program_count(&self) -> usize {
        self.institutions
            .iter()
            .map(|institution| institution.programs.len())
            .sum()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn institution(&self, id: &str) -> Option<&Institution> {
        self.institutions
            .iter()
            .find(|institution| institution.id == id)
    }

    /// Resolves the detail modal address (institution id + program name).
    pub fn find_program(
        &self,
        institution_id: &str,
        program_name: &str,
    ) -> Result<(&Institution, &Program), LookupError> {
        let institution = self
            .institution(institution_id)
            .ok_or_else(|| LookupError::InstitutionNotFound(institution_id.to_string()))?;
        let program =
            institution
                .find_program(program_name)
                .ok_or_else(|| LookupError::ProgramNotFound {
                    institution_id: institution_id.to_string(),
                    program_name: program_name.to_string(),
                })?;
        Ok((institution, program))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("institution '{0}' is not in the catalog")]
    InstitutionNotFound(String),
    #[error("program '{program_name}' not offered by '{institution_id}'")]
    ProgramNotFound {
        institution_id: String,
        program_name: String,
    },
}
