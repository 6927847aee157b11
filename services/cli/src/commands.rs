use clap::{Args, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use uni_directory::catalog::{CatalogLocation, CatalogStore, FetchError, FilterOptions};
use uni_directory::config::AppConfig;
use uni_directory::controller::DirectoryController;
use uni_directory::criteria::ControlValues;
use uni_directory::error::AppError;
use uni_directory::ingest::{write_catalog, CatalogBuilder};
use uni_directory::render::{render_program_detail, HtmlSurface};

use crate::output::{format_detail, format_options, JsonSurface, TerminalSurface};

#[derive(Args, Debug, Default, Clone)]
pub(crate) struct CatalogArgs {
    /// Catalog path or http(s) URL (overrides CATALOG_SOURCE)
    #[arg(long)]
    pub(crate) catalog: Option<String>,
    /// Append a cache-busting query parameter to catalog URLs
    #[arg(long)]
    pub(crate) cache_bust: bool,
}

impl CatalogArgs {
    pub(crate) fn location(&self, config: &AppConfig) -> Result<CatalogLocation, FetchError> {
        let source = self
            .catalog
            .as_deref()
            .unwrap_or(config.catalog.source.as_str());
        CatalogLocation::parse(
            source,
            self.cache_bust || config.catalog.cache_bust,
            config.catalog.timeout(),
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
    Html,
}

#[derive(Args, Debug, Default)]
pub(crate) struct SearchArgs {
    #[command(flatten)]
    pub(crate) catalog: CatalogArgs,
    /// Free-text search over program names and institution name/description
    #[arg(long, default_value = "")]
    pub(crate) search: String,
    /// Country filter ("all" or empty for any)
    #[arg(long, default_value = "")]
    pub(crate) country: String,
    /// Institution type filter, e.g. public or private
    #[arg(long = "type", default_value = "")]
    pub(crate) institution_type: String,
    /// Degree filter, e.g. bachelor, master, phd
    #[arg(long, default_value = "")]
    pub(crate) degree: String,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

impl SearchArgs {
    fn controls(&self) -> ControlValues {
        ControlValues {
            search: self.search.clone(),
            country: self.country.clone(),
            institution_type: self.institution_type.clone(),
            degree: self.degree.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct ShowArgs {
    #[command(flatten)]
    pub(crate) catalog: CatalogArgs,
    /// Institution identifier
    #[arg(long)]
    pub(crate) institution: String,
    /// Exact program name
    #[arg(long)]
    pub(crate) program: String,
}

#[derive(Args, Debug)]
pub(crate) struct BuildCatalogArgs {
    /// Universities CSV export
    #[arg(long)]
    pub(crate) universities: PathBuf,
    /// Programs CSV export
    #[arg(long)]
    pub(crate) programs: PathBuf,
    /// Output JSON file (stdout when omitted)
    #[arg(long)]
    pub(crate) out: Option<PathBuf>,
}

pub(crate) async fn run_search(config: &AppConfig, args: SearchArgs) -> Result<(), AppError> {
    let location = args.catalog.location(config)?;
    let controls = args.controls();

    match args.format {
        OutputFormat::Text => {
            let mut controller = DirectoryController::with_controls(TerminalSurface, controls);
            controller.start(&location).await?;
        }
        OutputFormat::Json => {
            let mut controller = DirectoryController::with_controls(JsonSurface, controls);
            controller.start(&location).await?;
        }
        OutputFormat::Html => {
            let mut controller = DirectoryController::with_controls(HtmlSurface::new(), controls);
            let outcome = controller.start(&location).await;
            print!("{}", controller.surface().list_html());
            outcome?;
        }
    }

    Ok(())
}

pub(crate) async fn run_show(config: &AppConfig, args: ShowArgs) -> Result<(), AppError> {
    let location = args.catalog.location(config)?;
    let store = CatalogStore::load(&location).await?;
    let (institution, program) = store.find_program(&args.institution, &args.program)?;
    print!("{}", format_detail(&render_program_detail(institution, program)));
    Ok(())
}

pub(crate) async fn run_options(config: &AppConfig, args: CatalogArgs) -> Result<(), AppError> {
    let location = args.location(config)?;
    let store = CatalogStore::load(&location).await?;
    let options = FilterOptions::from_catalog(store.institutions());
    print!("{}", format_options(&options));
    Ok(())
}

pub(crate) fn run_build_catalog(args: BuildCatalogArgs) -> Result<(), AppError> {
    let catalog = CatalogBuilder::from_paths(&args.universities, &args.programs)?;

    match &args.out {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            write_catalog(&catalog, file)?;
            info!(path = %path.display(), institutions = catalog.len(), "catalog written");
        }
        None => {
            write_catalog(&catalog, std::io::stdout().lock())?;
            println!();
        }
    }

    Ok(())
}
