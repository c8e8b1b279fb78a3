use crate::state::StateError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IaasError {
    #[error("invalid AWS credentials: {0}")]
    InvalidAwsCredentials(String),

    #[error("invalid GCP credentials: {0}")]
    InvalidGcpCredentials(String),

    #[error("--cert and --key are required for {iaas} {lb_type} load balancers")]
    CertificateRequired {
        iaas: &'static str,
        lb_type: String,
    },

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type IaasResult<T> = Result<T, IaasError>;
