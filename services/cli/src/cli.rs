use crate::browse::{run_browse, BrowseArgs};
use crate::commands::{
    run_build_catalog, run_options, run_search, run_show, BuildCatalogArgs, CatalogArgs,
    SearchArgs, ShowArgs,
};
use clap::{Parser, Subcommand};
use uni_directory::config::AppConfig;
use uni_directory::error::AppError;
use uni_directory::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "University Directory",
    about = "Search and browse the university catalog from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Filter the catalog once and print the matching cards (default command)
    Search(SearchArgs),
    /// Interactive filtering: each input line is a control change
    Browse(BrowseArgs),
    /// Show the full detail of one program
    Show(ShowArgs),
    /// List the values accepted by the country, type and degree filters
    Options(CatalogArgs),
    /// Build the JSON catalog from universities and programs CSV exports
    BuildCatalog(BuildCatalogArgs),
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let command = cli
        .command
        .unwrap_or_else(|| Command::Search(SearchArgs::default()));

    match command {
        Command::Search(args) => run_search(&config, args).await,
        Command::Browse(args) => run_browse(&config, args).await,
        Command::Show(args) => run_show(&config, args).await,
        Command::Options(args) => run_options(&config, args).await,
        Command::BuildCatalog(args) => run_build_catalog(args),
    }
}
