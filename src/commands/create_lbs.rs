use super::error::{CommandError, CommandResult};
use super::Command;
use crate::flags::{FlagResult, FlagSet};
use crate::iaas::{certs, Backends, LbCreate, LbRequest};
use crate::logger::Logger;
use crate::state::{LbType, State, StateValidator};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::instrument;

pub const NAME: &str = "create-lbs";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct CreateLbsConfig {
    lb_type: String,
    cert: Option<PathBuf>,
    key: Option<PathBuf>,
    chain: Option<PathBuf>,
    domain: Option<String>,
    skip_if_exists: bool,
}

pub struct CreateLbs {
    backends: Backends<dyn LbCreate>,
    logger: Arc<dyn Logger>,
    validator: Arc<dyn StateValidator>,
}

impl CreateLbs {
    pub fn new(
        gcp: Box<dyn LbCreate>,
        aws: Box<dyn LbCreate>,
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
            .required_string("type", "Load balancer type: concourse or cf")
            .string("cert", "Path to the load balancer certificate")
            .string("key", "Path to the load balancer private key")
            .string("chain", "Path to the certificate chain")
            .string("domain", "Domain the load balancer serves")
            .bool(
                "skip-if-exists",
                "Skip creation if a load balancer is already attached",
            )
    }

    fn parse_flags(args: &[String]) -> FlagResult<CreateLbsConfig> {
        let flags = Self::flags().parse(args.iter().cloned())?;
        Ok(CreateLbsConfig {
            lb_type: flags.string("type").unwrap_or_default(),
            cert: flags.non_empty("cert").map(PathBuf::from),
            key: flags.non_empty("key").map(PathBuf::from),
            chain: flags.non_empty("chain").map(PathBuf::from),
            domain: flags.non_empty("domain"),
            skip_if_exists: flags.bool("skip-if-exists"),
        })
    }
}

#[async_trait]
impl Command for CreateLbs {
    fn name(&self) -> &'static str {
        NAME
    }

    fn usage(&self) -> &'static str {
        "Attaches a load balancer to the environment"
    }

    #[instrument(name = "create-lbs", skip_all, fields(iaas = %state.iaas))]
    async fn execute(&self, args: &[String], state: &State) -> CommandResult<()> {
        let config = Self::parse_flags(args)?;
        let lb_type: LbType = config.lb_type.parse()?;

        if config.skip_if_exists && state.has_lb() {
            self.logger.println(&format!(
                "lb type {:?} exists, skipping...",
                state.stack.lb_type
            ));
            return Ok(());
        }

        self.validator.validate(state)?;

        if state.has_lb() {
            return Err(CommandError::usage(format!(
                "bbl already has a {} load balancer attached, please remove the previous load balancer before attaching a new one",
                state.stack.lb_type
            )));
        }

        // --- Load Certificate ---
        let certificate = certs::load(
            config.cert.as_deref(),
            config.key.as_deref(),
            config.chain.as_deref(),
        )
        .await?;
        let request = LbRequest {
            lb_type,
            certificate,
            domain: config.domain,
        };

        // --- Attach Load Balancer ---
        let executor = self.backends.route(&state.iaas)?;
        executor.execute(&request, state).await?;
        Ok(())
    }
}
