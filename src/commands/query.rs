use super::error::{CommandError, CommandResult};
use super::Command;
use crate::flags::FlagSet;
use crate::logger::Logger;
use crate::state::{State, StateValidator};
use async_trait::async_trait;
use std::sync::Arc;

/// Prints one value recorded in state, for scripts to capture.
pub struct StateQuery {
    name: &'static str,
    label: &'static str,
    usage: &'static str,
    read: Reader,
    logger: Arc<dyn Logger>,
    validator: Arc<dyn StateValidator>,
}

fn director_address(state: &State) -> &str {
    &state.bosh.director_address
}

fn director_username(state: &State) -> &str {
    &state.bosh.director_username
}

fn director_password(state: &State) -> &str {
    &state.bosh.director_password
}

fn director_ca_cert(state: &State) -> &str {
    &state.bosh.director_ssl_ca
}

fn env_id(state: &State) -> &str {
    &state.env_id
}

type Reader = fn(&State) -> &str;

const QUERIES: [(&str, &str, &str, Reader); 5] = [
    (
        "director-address",
        "director address",
        "Prints the BOSH director address",
        director_address,
    ),
    (
        "director-username",
        "director username",
        "Prints the BOSH director username",
        director_username,
    ),
    (
        "director-password",
        "director password",
        "Prints the BOSH director password",
        director_password,
    ),
    (
        "director-ca-cert",
        "director ca cert",
        "Prints the BOSH director CA certificate",
        director_ca_cert,
    ),
    ("env-id", "environment id", "Prints the environment id", env_id),
];

impl StateQuery {
    /// Every value that can be queried, one command each.
    pub fn all(logger: Arc<dyn Logger>, validator: Arc<dyn StateValidator>) -> Vec<StateQuery> {
        QUERIES
            .iter()
            .map(|&(name, label, usage, read)| StateQuery {
                name,
                label,
                usage,
                read,
                logger: logger.clone(),
                validator: validator.clone(),
            })
            .collect()
    }
}

#[async_trait]
impl Command for StateQuery {
    fn name(&self) -> &'static str {
        self.name
    }

    fn usage(&self) -> &'static str {
        self.usage
    }

    async fn execute(&self, args: &[String], state: &State) -> CommandResult<()> {
        FlagSet::new(self.name).parse(args.iter().cloned())?;
        self.validator.validate(state)?;

        let value = (self.read)(state);
        if value.is_empty() {
            return Err(CommandError::MissingValue(self.label));
        }

        self.logger.output(value.trim_end())?;
        Ok(())
    }
}
