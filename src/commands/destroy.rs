use super::error::CommandResult;
use super::Command;
use crate::flags::{FlagResult, FlagSet};
use crate::iaas::{Backends, EnvironmentDestroy};
use crate::logger::Logger;
use crate::state::{State, StateValidator};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument};

pub const NAME: &str = "destroy";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct DestroyConfig {
    no_confirm: bool,
    skip_if_missing: bool,
}

pub struct Destroy {
    backends: Backends<dyn EnvironmentDestroy>,
    logger: Arc<dyn Logger>,
    validator: Arc<dyn StateValidator>,
}

impl Destroy {
    pub fn new(
        gcp: Box<dyn EnvironmentDestroy>,
        aws: Box<dyn EnvironmentDestroy>,
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
            .bool("no-confirm", "Do not ask for confirmation")
            .bool(
                "skip-if-missing",
                "Exit successfully when there is no environment to destroy",
            )
    }

    fn parse_flags(args: &[String]) -> FlagResult<DestroyConfig> {
        let flags = Self::flags().parse(args.iter().cloned())?;
        Ok(DestroyConfig {
            no_confirm: flags.bool("no-confirm"),
            skip_if_missing: flags.bool("skip-if-missing"),
        })
    }
}

#[async_trait]
impl Command for Destroy {
    fn name(&self) -> &'static str {
        NAME
    }

    fn usage(&self) -> &'static str {
        "Tears down the BOSH director and all infrastructure of the environment"
    }

    #[instrument(name = "destroy", skip_all, fields(env_id = %state.env_id))]
    async fn execute(&self, args: &[String], state: &State) -> CommandResult<()> {
        let config = Self::parse_flags(args)?;

        if config.skip_if_missing && state.is_empty() {
            self.logger
                .println("state file not found, and --skip-if-missing flag provided, exiting");
            return Ok(());
        }

        self.validator.validate(state)?;

        // --- Confirmation Prompt ---
        if !config.no_confirm {
            let question = format!(
                "Are you sure you want to delete infrastructure for {}? This operation cannot be undone!",
                state.env_id
            );
            if !self.logger.prompt(&question) {
                info!("Destruction cancelled by user.");
                self.logger.println("exiting...");
                return Ok(());
            }
        }

        // --- Destruction ---
        let executor = self.backends.route(&state.iaas)?;
        executor.execute(state).await?;
        self.logger
            .println(&format!("environment {} destroyed", state.env_id));
        Ok(())
    }
}
