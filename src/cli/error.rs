use crate::commands::CommandError;
use crate::state::StateError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("unrecognized command {command:?}, valid commands are: {valid}")]
    UnknownCommand { command: String, valid: String },

    #[error("Could not determine the state directory: {0}")]
    StateDir(#[source] std::io::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Command(#[from] CommandError),
}
