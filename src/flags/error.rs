use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FlagError {
    #[error("{command}: {message}")]
    Invalid { command: String, message: String },

    #[error("{command}: missing required flag --{flag}")]
    MissingRequired { command: String, flag: String },
}

impl FlagError {
    /// Builds an `Invalid` error from a clap error, keeping only the headline.
    ///
    /// clap renders usage and tip lines after the first line; those reference
    /// a binary name that makes no sense for a subcommand tail.
    pub(crate) fn from_clap(command: &str, err: &clap::Error) -> Self {
        let rendered = err.to_string();
        let headline = rendered
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("invalid arguments");

        FlagError::Invalid {
            command: command.to_string(),
            message: headline.trim_start_matches("error: ").to_string(),
        }
    }
}

pub type FlagResult<T> = Result<T, FlagError>;
