//! Subcommands and the registry that maps their names to implementations.

pub mod create_lbs;
pub mod delete_lbs;
pub mod destroy;
pub mod error;
pub mod lbs;
pub mod query;
pub mod up;
pub mod update_lbs;

pub use create_lbs::CreateLbs;
pub use delete_lbs::DeleteLbs;
pub use destroy::Destroy;
pub use error::{CommandError, CommandResult};
pub use lbs::Lbs;
pub use query::StateQuery;
pub use up::Up;
pub use update_lbs::UpdateLbs;

use crate::iaas::{aws, gcp};
use crate::logger::Logger;
use crate::state::{State, StateFileValidator, StateStore, StateValidator};
use async_trait::async_trait;
use std::sync::Arc;

/// A subcommand: parses its own arguments and acts on the loaded state.
#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;

    /// One line shown in the command listing.
    fn usage(&self) -> &'static str;

    async fn execute(&self, args: &[String], state: &State) -> CommandResult<()>;
}

/// Every command, wired to the real backends for one state directory.
pub struct Registry {
    commands: Vec<Box<dyn Command>>,
}

impl Registry {
    pub fn new(store: StateStore, logger: Arc<dyn Logger>) -> Self {
        let validator: Arc<dyn StateValidator> = Arc::new(StateFileValidator::new(store.clone()));

        let mut commands: Vec<Box<dyn Command>> = vec![
            Box::new(Up::new(
                Box::new(gcp::GcpUp::new(store.clone(), logger.clone())),
                Box::new(aws::AwsUp::new(store.clone(), logger.clone())),
            )),
            Box::new(Destroy::new(
                Box::new(gcp::GcpDestroy::new(store.clone(), logger.clone())),
                Box::new(aws::AwsDestroy::new(store.clone(), logger.clone())),
                logger.clone(),
                validator.clone(),
            )),
            Box::new(CreateLbs::new(
                Box::new(gcp::GcpCreateLbs::new(store.clone(), logger.clone())),
                Box::new(aws::AwsCreateLbs::new(store.clone(), logger.clone())),
                logger.clone(),
                validator.clone(),
            )),
            Box::new(UpdateLbs::new(
                Box::new(gcp::GcpUpdateLbs::new(store.clone(), logger.clone())),
                Box::new(aws::AwsUpdateLbs::new(store.clone(), logger.clone())),
                logger.clone(),
                validator.clone(),
            )),
            Box::new(DeleteLbs::new(
                Box::new(gcp::GcpDeleteLbs::new(store.clone(), logger.clone())),
                Box::new(aws::AwsDeleteLbs::new(store, logger.clone())),
                logger.clone(),
                validator.clone(),
            )),
            Box::new(Lbs::new(logger.clone(), validator.clone())),
        ];

        commands.extend(
            StateQuery::all(logger, validator)
                .into_iter()
                .map(|query| Box::new(query) as Box<dyn Command>),
        );

        Self { commands }
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands
            .iter()
            .find(|command| command.name() == name)
            .map(|command| command.as_ref())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.commands.iter().map(|command| command.name()).collect()
    }

    /// `(name, usage)` for every command, in listing order.
    pub fn listing(&self) -> Vec<(&'static str, &'static str)> {
        self.commands
            .iter()
            .map(|command| (command.name(), command.usage()))
            .collect()
    }
}
