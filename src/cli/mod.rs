mod error;
pub mod parser;
mod ui;

pub use error::CliError;

use crate::commands::Registry;
use crate::logger::{ConsoleLogger, Logger};
use crate::state::StateStore;
use clap::{CommandFactory, Parser};
use parser::{Cli, Commands, VERSION_INFO};
use std::sync::Arc;
use tracing::{debug, instrument};

pub fn parse_args() -> Cli {
    Cli::parse()
}

/// Runs the parsed command line against the console.
pub async fn run(cli: Cli) -> Result<(), CliError> {
    dispatch(cli, Arc::new(ConsoleLogger::new())).await
}

/// Resolves the state dir, builds the command registry and dispatches the
/// named command with its raw arguments.
#[instrument(name = "bbl", skip_all)]
async fn dispatch(cli: Cli, logger: Arc<dyn Logger>) -> Result<(), CliError> {
    let state_dir = match cli.state_dir {
        Some(dir) => dir,
        None => std::env::current_dir().map_err(CliError::StateDir)?,
    };
    let store = StateStore::new(state_dir);
    let registry = Registry::new(store.clone(), logger.clone());

    // --- Built-in Commands ---
    let args = match cli.command {
        _ if cli.help => return print_help(&registry, logger.as_ref()),
        None | Some(Commands::Help) => return print_help(&registry, logger.as_ref()),
        Some(Commands::Version) => {
            logger.output(&format!("bbl {}", VERSION_INFO))?;
            return Ok(());
        }
        Some(Commands::Run(args)) => args,
    };

    // clap never yields an empty external subcommand
    let Some((name, tail)) = args.split_first() else {
        return Ok(());
    };

    // --- Command Lookup ---
    let command = registry
        .get(name)
        .ok_or_else(|| CliError::UnknownCommand {
            command: name.clone(),
            valid: registry.names().join(", "),
        })?;

    // --- Load State and Execute ---
    let state = store.load().await?;
    debug!(
        command = name.as_str(),
        state_dir = %store.dir().display(),
        iaas = %state.iaas,
        "Dispatching command"
    );
    command.execute(tail, &state).await?;
    Ok(())
}

fn print_help(registry: &Registry, logger: &dyn Logger) -> Result<(), CliError> {
    logger.output(&Cli::command().render_help().to_string())?;
    logger.output(&ui::format_commands(&registry.listing()))?;
    Ok(())
}
