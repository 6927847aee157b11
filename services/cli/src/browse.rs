use clap::Args;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use uni_directory::config::AppConfig;
use uni_directory::controller::{ControlEvent, DirectoryController};
use uni_directory::error::AppError;

use crate::commands::CatalogArgs;
use crate::output::{format_options, TerminalSurface};

const HELP: &str = "\
commands:
  search <text>            set the search box (empty clears it)
  country <value|all>      select a country
  type <value|all>         select an institution type
  degree <value|all>       select a degree
  open <id> <program name> show one program's detail
  options                  list accepted filter values
  help                     show this message
  quit                     leave the session
";

#[derive(Args, Debug)]
pub(crate) struct BrowseArgs {
    #[command(flatten)]
    pub(crate) catalog: CatalogArgs,
}

/// One parsed input line of the interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BrowseCommand {
    Control(ControlEvent),
    Open {
        institution_id: String,
        program_name: String,
    },
    Options,
    Help,
    Quit,
    Unknown(String),
}

pub(crate) fn parse_line(line: &str) -> Option<BrowseCommand> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "search" => BrowseCommand::Control(ControlEvent::SearchInput(rest.to_string())),
        "country" => BrowseCommand::Control(ControlEvent::CountryChanged(rest.to_string())),
        "type" => BrowseCommand::Control(ControlEvent::TypeChanged(rest.to_string())),
        "degree" => BrowseCommand::Control(ControlEvent::DegreeChanged(rest.to_string())),
        "open" => match rest.split_once(char::is_whitespace) {
            Some((institution_id, program_name)) if !program_name.trim().is_empty() => {
                BrowseCommand::Open {
                    institution_id: institution_id.to_string(),
                    program_name: program_name.trim().to_string(),
                }
            }
            _ => BrowseCommand::Unknown(line.to_string()),
        },
        "options" => BrowseCommand::Options,
        "help" | "?" => BrowseCommand::Help,
        "quit" | "exit" => BrowseCommand::Quit,
        _ => BrowseCommand::Unknown(line.to_string()),
    };
    Some(command)
}

pub(crate) async fn run_browse(config: &AppConfig, args: BrowseArgs) -> Result<(), AppError> {
    let location = args.catalog.location(config)?;
    let mut controller = DirectoryController::new(TerminalSurface);
    controller.start(&location).await?;
    eprint!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let Some(command) = parse_line(&line) else {
            continue;
        };
        debug!(?command, "browse input");

        match command {
            BrowseCommand::Control(event) => controller.handle(event),
            BrowseCommand::Open {
                institution_id,
                program_name,
            } => controller.open_program(&institution_id, &program_name),
            BrowseCommand::Options => {
                if let Some(options) = controller.filter_options() {
                    print!("{}", format_options(&options));
                }
            }
            BrowseCommand::Help => eprint!("{HELP}"),
            BrowseCommand::Quit => break,
            BrowseCommand::Unknown(input) => eprintln!("unrecognized input: {input}"),
        }
    }

    info!("browse session ended");
    Ok(())
}
