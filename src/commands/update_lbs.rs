use super::error::{CommandError, CommandResult};
use super::Command;
use crate::flags::{FlagResult, FlagSet};
use crate::iaas::{certs, Backends, LbRequest, LbUpdate};
use crate::logger::Logger;
use crate::state::{LbType, State, StateValidator};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::instrument;

pub const NAME: &str = "update-lbs";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct UpdateLbsConfig {
    cert: PathBuf,
    key: PathBuf,
    chain: Option<PathBuf>,
    domain: Option<String>,
    skip_if_missing: bool,
}

/// Rotates the certificate of the attached load balancer.
pub struct UpdateLbs {
    backends: Backends<dyn LbUpdate>,
    logger: Arc<dyn Logger>,
    validator: Arc<dyn StateValidator>,
}

impl UpdateLbs {
    pub fn new(
        gcp: Box<dyn LbUpdate>,
        aws: Box<dyn LbUpdate>,
        logger: Arc<dyn Logger>,
        validator: Arc<dyn StateValidator>,
    ) -> Self {
        Self {
            backends: Backends::new(gcp, aws),
            logger,
            validator,
        }
    }

    fn flags() -> FlagSet {
        FlagSet::new(NAME)
            .required_string("cert", "Path to the new certificate")
            .required_string("key", "Path to the new private key")
            .string("chain", "Path to the certificate chain")
            .string("domain", "Domain the load balancer serves")
            .bool(
                "skip-if-missing",
                "Skip the update if no load balancer is attached",
            )
    }

    fn parse_flags(args: &[String]) -> FlagResult<UpdateLbsConfig> {
        let flags = Self::flags().parse(args.iter().cloned())?;
        Ok(UpdateLbsConfig {
            cert: flags.string("cert").map(PathBuf::from).unwrap_or_default(),
            key: flags.string("key").map(PathBuf::from).unwrap_or_default(),
            chain: flags.non_empty("chain").map(PathBuf::from),
            domain: flags.non_empty("domain"),
            skip_if_missing: flags.bool("skip-if-missing"),
        })
    }
}

#[async_trait]
impl Command for UpdateLbs {
    fn name(&self) -> &'static str {
        NAME
    }

    fn usage(&self) -> &'static str {
        "Updates the certificate of the attached load balancer"
    }

    #[instrument(name = "update-lbs", skip_all, fields(iaas = %state.iaas))]
    async fn execute(&self, args: &[String], state: &State) -> CommandResult<()> {
        let config = Self::parse_flags(args)?;

        if config.skip_if_missing && !state.has_lb() {
            self.logger.println("no lb type exists, skipping...");
            return Ok(());
        }

        self.validator.validate(state)?;

        let lb_type: LbType = state.stack.lb_type.parse().map_err(|_| {
            CommandError::usage("no load balancer has been found for this bbl environment")
        })?;

        let certificate = certs::load(
            Some(config.cert.as_path()),
            Some(config.key.as_path()),
            config.chain.as_deref(),
        )
        .await?;

        if let Some(certificate) = &certificate {
            let domain_unchanged = config
                .domain
                .as_deref()
                .map_or(true, |domain| domain == state.lb.domain);
            if domain_unchanged
                && certificate.same_as(&state.lb.cert, &state.lb.key, &state.lb.chain)
            {
                self.logger.println("no updates are to be performed");
                return Ok(());
            }
        }

        let request = LbRequest {
            lb_type,
            certificate,
            domain: config.domain.or_else(|| {
                Some(state.lb.domain.clone()).filter(|domain| !domain.is_empty())
            }),
        };

        let executor = self.backends.route(&state.iaas)?;
        executor.execute(&request, state).await?;
        Ok(())
    }
}
