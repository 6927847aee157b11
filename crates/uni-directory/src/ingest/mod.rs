//! Builds the JSON catalog from the universities and programs CSV exports.

mod parser;

use std::collections::{HashMap, HashSet};
use std::io::{Read, Write};
use std::path::Path;

use tracing::{info, warn};

use crate::catalog::{parse_priority, slugify, Institution, InstitutionType, Program};
use parser::{parse_rows, ProgramRow, UniversityRow};

/// Root folder of the generated university pages.
const PAGES_ROOT: &str = "unis";

/// How many programs a university page features.
const FEATURED_PROGRAMS: usize = 4;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to access catalog export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("university id '{0}' appears more than once")]
    DuplicateInstitution(String),
}

pub struct CatalogBuilder;

impl CatalogBuilder {
    pub fn from_paths<U: AsRef<Path>, P: AsRef<Path>>(
        universities: U,
        programs: P,
    ) -> Result<Vec<Institution>, IngestError> {
        let universities = std::fs::File::open(universities)?;
        let programs = std::fs::File::open(programs)?;
        Self::from_readers(universities, programs)
    }

    /// Joins programs to their university, orders them by priority and fills
    /// in slugs and page URLs. Universities keep their CSV order.
    pub fn from_readers<U: Read, P: Read>(
        universities: U,
        programs: P,
    ) -> Result<Vec<Institution>, IngestError> {
        let university_rows: Vec<UniversityRow> = parse_rows(universities)?;
        let program_rows: Vec<ProgramRow> = parse_rows(programs)?;

        let mut seen = HashSet::new();
        for row in &university_rows {
            if !seen.insert(row.id.as_str()) {
                return Err(IngestError::DuplicateInstitution(row.id.clone()));
            }
        }

        let mut by_university: HashMap<String, Vec<Program>> = HashMap::new();
        let mut orphans = 0usize;
        for row in program_rows {
            if !seen.contains(row.university_id.as_str()) {
                orphans += 1;
                continue;
            }
            by_university
                .entry(row.university_id.clone())
                .or_default()
                .push(build_program(row));
        }
        if orphans > 0 {
            warn!(orphans, "skipped programs referencing unknown universities");
        }

        let institutions: Vec<Institution> = university_rows
            .into_iter()
            .map(|row| {
                let programs = by_university.remove(&row.id).unwrap_or_default();
                build_institution(row, programs)
            })
            .collect();

        info!(
            institutions = institutions.len(),
            programs = institutions.iter().map(|i| i.programs.len()).sum::<usize>(),
            "catalog built from CSV"
        );

        Ok(institutions)
    }
}

/// Writes the catalog as the pretty-printed JSON array the browser loads.
pub fn write_catalog<W: Write>(institutions: &[Institution], writer: W) -> Result<(), IngestError> {
    serde_json::to_writer_pretty(writer, institutions)?;
    Ok(())
}

fn build_program(row: ProgramRow) -> Program {
    let slug = slugify(&row.name);
    Program {
        internal_url: Some(format!("{slug}.html")),
        slug: Some(slug),
        name: row.name,
        degree: row.degree.unwrap_or_default(),
        degree_level: row.degree_level,
        overview: row.overview.unwrap_or_default(),
        duration: row.duration,
        language: row.language.unwrap_or_default(),
        admission_requirements: row.admission_requirements.unwrap_or_default(),
        tuition: row.tuition.unwrap_or_default(),
        priority: row.priority.as_deref().and_then(parse_priority),
    }
}

fn build_institution(row: UniversityRow, mut programs: Vec<Program>) -> Institution {
    // Stable: equal or missing priorities keep their CSV order.
    programs.sort_by_key(|program| program.priority.unwrap_or(i32::MAX));

    let slug = slugify(&row.id);
    let country_slug = slugify(&row.country);
    let internal_url = format!("{PAGES_ROOT}/{country_slug}/{slug}/{slug}_university.html");
    let priority_programs = programs.iter().take(FEATURED_PROGRAMS).cloned().collect();

    Institution {
        id: row.id,
        name: row.name,
        country: row.country,
        kind: InstitutionType::from(row.kind),
        description: row.description.unwrap_or_default(),
        logo: row.explore_logo.unwrap_or_default(),
        url: row.explore_url.unwrap_or_default(),
        programs,
        priority_programs: Some(priority_programs),
        slug: Some(slug),
        internal_url: Some(internal_url),
    }
}
