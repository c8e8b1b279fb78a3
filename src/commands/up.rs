use super::error::{CommandError, CommandResult};
use super::Command;
use crate::flags::{FlagResult, FlagSet};
use crate::iaas::aws::AwsCredentials;
use crate::iaas::gcp::GcpCredentials;
use crate::iaas::{director, Backends, EnvironmentUp, Iaas, UpRequest};
use crate::state::State;
use async_trait::async_trait;
use tracing::{info, instrument};

pub const NAME: &str = "up";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct UpConfig {
    iaas: Option<String>,
    name: Option<String>,
    aws: AwsCredentials,
    gcp: GcpCredentials,
}

/// Creates an environment, or re-applies one that already exists.
///
/// Credentials not given on the command line are taken from state, so a
/// second `up` against the same state dir needs no flags.
pub struct Up {
    backends: Backends<dyn EnvironmentUp>,
}

impl Up {
    pub fn new(gcp: Box<dyn EnvironmentUp>, aws: Box<dyn EnvironmentUp>) -> Self {
        Self {
            backends: Backends::new(gcp, aws),
        }
    }

    fn flags() -> FlagSet {
        FlagSet::new(NAME)
            .string("iaas", "IaaS to deploy to: gcp or aws")
            .string("name", "Name for the environment, generated when omitted")
            .string("aws-access-key-id", "AWS access key id")
            .string("aws-secret-access-key", "AWS secret access key")
            .string("aws-region", "AWS region")
            .string("gcp-service-account-key", "Path to (or contents of) a GCP service account key")
            .string("gcp-project-id", "GCP project id")
            .string("gcp-region", "GCP region")
            .string("gcp-zone", "GCP zone")
    }

    fn parse_flags(args: &[String]) -> FlagResult<UpConfig> {
        let flags = Self::flags().parse(args.iter().cloned())?;
        let value = |name: &str| flags.non_empty(name).unwrap_or_default();
        Ok(UpConfig {
            iaas: flags.non_empty("iaas"),
            name: flags.non_empty("name"),
            aws: AwsCredentials {
                access_key_id: value("aws-access-key-id"),
                secret_access_key: value("aws-secret-access-key"),
                region: value("aws-region"),
            },
            gcp: GcpCredentials {
                service_account_key: value("gcp-service-account-key"),
                project_id: value("gcp-project-id"),
                region: value("gcp-region"),
                zone: value("gcp-zone"),
            },
        })
    }

    fn resolve_iaas(config: &UpConfig, state: &State) -> CommandResult<Iaas> {
        let requested = match (&config.iaas, state.iaas.as_str()) {
            (None, "") => {
                return Err(CommandError::usage(format!(
                    "--iaas {} must be provided",
                    Iaas::supported_names()
                )))
            }
            (None, existing) => existing,
            (Some(flag), "") => flag.as_str(),
            (Some(flag), existing) if flag == existing => flag.as_str(),
            (Some(flag), existing) => {
                return Err(CommandError::usage(format!(
                    "the iaas provided ({}) must match the iaas in bbl-state.json ({})",
                    flag, existing
                )))
            }
        };
        Ok(requested.parse::<Iaas>()?)
    }

    fn env_id(config: &UpConfig, state: &State) -> CommandResult<String> {
        match (&config.name, state.env_id.as_str()) {
            (Some(name), existing) if !existing.is_empty() && name != existing => {
                Err(CommandError::usage(format!(
                    "the director name cannot be changed for an existing environment (current: {})",
                    existing
                )))
            }
            (Some(name), _) => Ok(name.clone()),
            (None, "") => Ok(format!("bbl-env-{}", director::random_hex("bbl-env", 8))),
            (None, existing) => Ok(existing.to_string()),
        }
    }
}

/// Fills every credential not given on the command line from state.
fn merge_credentials(config: &mut UpConfig, state: &State) {
    let aws = AwsCredentials::from_state(&state.aws);
    let fill = |field: &mut String, stored: &str| {
        if field.is_empty() {
            *field = stored.to_string();
        }
    };
    fill(&mut config.aws.access_key_id, &aws.access_key_id);
    fill(&mut config.aws.secret_access_key, &aws.secret_access_key);
    fill(&mut config.aws.region, &aws.region);

    let gcp = GcpCredentials::from_state(&state.gcp);
    fill(&mut config.gcp.service_account_key, &gcp.service_account_key);
    fill(&mut config.gcp.project_id, &gcp.project_id);
    fill(&mut config.gcp.region, &gcp.region);
    fill(&mut config.gcp.zone, &gcp.zone);
}

#[async_trait]
impl Command for Up {
    fn name(&self) -> &'static str {
        NAME
    }

    fn usage(&self) -> &'static str {
        "Deploys a BOSH director on an IaaS, creating the environment if needed"
    }

    #[instrument(name = "up", skip_all)]
    async fn execute(&self, args: &[String], state: &State) -> CommandResult<()> {
        let mut config = Self::parse_flags(args)?;
        let iaas = Self::resolve_iaas(&config, state)?;
        merge_credentials(&mut config, state);

        let request = UpRequest {
            env_id: Self::env_id(&config, state)?,
            aws: config.aws,
            gcp: config.gcp,
        };
        info!(%iaas, env_id = %request.env_id, "Bringing up environment");

        self.backends.get(iaas).execute(&request, state).await?;
        Ok(())
    }
}
