use crate::flags::FlagError;
use crate::iaas::certs::CertificateError;
use crate::iaas::{IaasError, UnsupportedIaas};
use crate::state::{InvalidLbType, StateError, ValidationError};
use thiserror::Error;

/// Everything a command can fail with. Errors from collaborators are
/// forwarded with their own message intact.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] FlagError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    UnsupportedIaas(#[from] UnsupportedIaas),

    #[error(transparent)]
    Executor(#[from] IaasError),

    #[error(transparent)]
    InvalidLbType(#[from] InvalidLbType),

    #[error(transparent)]
    Certificate(#[from] CertificateError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("{0}")]
    Usage(String),

    #[error("Could not retrieve {0}, please make sure you are targeting the proper state dir.")]
    MissingValue(&'static str),
}

impl CommandError {
    pub fn usage(msg: impl Into<String>) -> Self {
        CommandError::Usage(msg.into())
    }
}

pub type CommandResult<T> = Result<T, CommandError>;
