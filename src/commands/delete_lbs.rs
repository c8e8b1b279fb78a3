use super::error::CommandResult;
use super::Command;
use crate::flags::{FlagResult, FlagSet};
use crate::iaas::{Backends, LbDelete};
use crate::logger::Logger;
use crate::state::{lb_exists, State, StateValidator};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

pub const NAME: &str = "delete-lbs";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct DeleteLbsConfig {
    skip_if_missing: bool,
}

/// Removes the load balancer attached to an environment.
///
/// With `--skip-if-missing` an environment without a load balancer (or no
/// environment at all) is a successful no-op, so teardown scripts can call
/// this unconditionally.
pub struct DeleteLbs {
    backends: Backends<dyn LbDelete>,
    logger: Arc<dyn Logger>,
    validator: Arc<dyn StateValidator>,
}

impl DeleteLbs {
    pub fn new(
        gcp: Box<dyn LbDelete>,
        aws: Box<dyn LbDelete>,
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
        FlagSet::new(NAME).bool(
            "skip-if-missing",
            "Skip deleting the load balancer if none is attached",
        )
    }

    fn parse_flags(args: &[String]) -> FlagResult<DeleteLbsConfig> {
        let flags = Self::flags().parse(args.iter().cloned())?;
        Ok(DeleteLbsConfig {
            skip_if_missing: flags.bool("skip-if-missing"),
        })
    }
}

#[async_trait]
impl Command for DeleteLbs {
    fn name(&self) -> &'static str {
        NAME
    }

    fn usage(&self) -> &'static str {
        "Deletes the load balancers attached to the environment"
    }

    #[instrument(name = "delete-lbs", skip_all, fields(iaas = %state.iaas))]
    async fn execute(&self, args: &[String], state: &State) -> CommandResult<()> {
        // --- Parse Flags ---
        let config = Self::parse_flags(args)?;

        // --- Skip Gate ---
        // Runs before validation so a missing state file still skips.
        if config.skip_if_missing && !lb_exists(&state.stack.lb_type) {
            self.logger.println("no lb type exists, skipping...");
            return Ok(());
        }

        // --- Validate State ---
        self.validator.validate(state)?;

        // --- Route to IaaS Backend ---
        let executor = self.backends.route(&state.iaas)?;
        executor.execute(state).await?;
        Ok(())
    }
}
