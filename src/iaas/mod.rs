//! Supported infrastructure backends and routing between them.
//!
//! Backend selection is a closed enum. Every command that acts on an
//! environment holds one executor per variant in a [`Backends`] table built
//! at startup and picks one by the `iaas` value recorded in state; an
//! unknown value is rejected before any executor runs.

pub mod aws;
pub mod certs;
pub mod director;
pub mod error;
pub mod gcp;
pub mod ledger;
pub mod traits;
pub mod types;

pub use error::{IaasError, IaasResult};
pub use traits::{EnvironmentDestroy, EnvironmentUp, LbCreate, LbDelete, LbUpdate};
pub use types::{LbRequest, UpRequest};

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Iaas {
    Aws,
    Gcp,
}

impl Iaas {
    /// Supported backends in the order they are listed to users.
    pub const SUPPORTED: [Iaas; 2] = [Iaas::Gcp, Iaas::Aws];

    pub fn as_str(&self) -> &'static str {
        match self {
            Iaas::Aws => "aws",
            Iaas::Gcp => "gcp",
        }
    }

    /// `[gcp, aws]`
    pub fn supported_names() -> String {
        let names: Vec<&str> = Self::SUPPORTED.iter().map(Iaas::as_str).collect();
        format!("[{}]", names.join(", "))
    }
}

impl fmt::Display for Iaas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{value:?} is an invalid iaas type in state, supported iaas types are: {supported}", supported = Iaas::supported_names())]
pub struct UnsupportedIaas {
    pub value: String,
}

impl FromStr for Iaas {
    type Err = UnsupportedIaas;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::SUPPORTED
            .into_iter()
            .find(|iaas| iaas.as_str() == s)
            .ok_or_else(|| UnsupportedIaas {
                value: s.to_string(),
            })
    }
}

/// One executor per supported backend.
pub struct Backends<T: ?Sized> {
    gcp: Box<T>,
    aws: Box<T>,
}

impl<T: ?Sized> Backends<T> {
    pub fn new(gcp: Box<T>, aws: Box<T>) -> Self {
        Self { gcp, aws }
    }

    pub fn get(&self, iaas: Iaas) -> &T {
        match iaas {
            Iaas::Gcp => &*self.gcp,
            Iaas::Aws => &*self.aws,
        }
    }

    /// Picks the executor for the raw `iaas` value found in state.
    pub fn route(&self, iaas: &str) -> Result<&T, UnsupportedIaas> {
        let iaas: Iaas = iaas.parse()?;
        tracing::debug!(%iaas, "Routing to backend");
        Ok(self.get(iaas))
    }
}
