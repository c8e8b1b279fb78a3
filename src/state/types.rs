use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const STATE_VERSION: u32 = 1;

/// Durable record of one environment, persisted as `bbl-state.json`.
///
/// `iaas` is kept as the raw string read from disk so an unrecognized value
/// survives loading and is rejected at routing time with a useful message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct State {
    pub version: u32,
    pub iaas: String,
    #[serde(rename = "envID")]
    pub env_id: String,
    pub aws: AwsState,
    pub gcp: GcpState,
    pub stack: Stack,
    pub lb: LbState,
    pub bosh: BoshState,
}

impl State {
    /// True for the state of a directory nobody has run `up` against.
    pub fn is_empty(&self) -> bool {
        self.iaas.is_empty() && self.env_id.is_empty()
    }

    pub fn has_lb(&self) -> bool {
        lb_exists(&self.stack.lb_type)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AwsState {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub region: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GcpState {
    pub service_account_key: String,
    #[serde(rename = "projectID")]
    pub project_id: String,
    pub region: String,
    pub zone: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stack {
    pub name: String,
    /// Attached load balancer type. Anything other than a known type
    /// (including the empty string) means no load balancer.
    pub lb_type: String,
    pub certificate_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LbState {
    pub cert: String,
    pub key: String,
    pub chain: String,
    pub domain: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoshState {
    pub director_name: String,
    pub director_address: String,
    pub director_username: String,
    pub director_password: String,
    #[serde(rename = "directorSSLCA")]
    pub director_ssl_ca: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LbType {
    Concourse,
    Cf,
}

impl LbType {
    pub const ALL: [LbType; 2] = [LbType::Concourse, LbType::Cf];

    pub fn as_str(&self) -> &'static str {
        match self {
            LbType::Concourse => "concourse",
            LbType::Cf => "cf",
        }
    }
}

impl fmt::Display for LbType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0:?} is not a valid lb type, valid lb types are: concourse and cf")]
pub struct InvalidLbType(pub String);

impl FromStr for LbType {
    type Err = InvalidLbType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LbType::ALL
            .into_iter()
            .find(|lb_type| lb_type.as_str() == s)
            .ok_or_else(|| InvalidLbType(s.to_string()))
    }
}

/// Whether the stored load balancer type names an attached load balancer.
pub fn lb_exists(lb_type: &str) -> bool {
    lb_type.parse::<LbType>().is_ok()
}
