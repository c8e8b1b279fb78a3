use super::store::{StateStore, STATE_FILE};
use super::types::State;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{file} not found in {dir:?}, ensure you're running this command in the proper state directory or create a new environment with bbl up", file = STATE_FILE)]
    StateNotFound { dir: PathBuf },

    #[error("{file} in {dir:?} is missing {field}", file = STATE_FILE)]
    MissingField { dir: PathBuf, field: &'static str },
}

/// Precondition check run before any command acts on an environment.
pub trait StateValidator: Send + Sync {
    /// Checks `state`, as loaded from the store, before a command acts on it.
    fn validate(&self, state: &State) -> Result<(), ValidationError>;
}

/// Checks that the state directory holds a state file for an environment
/// that has been brought up.
///
/// The file is not read again: the router has already loaded it, and a
/// corrupt file fails there.
#[derive(Debug, Clone)]
pub struct StateFileValidator {
    store: StateStore,
}

impl StateFileValidator {
    pub fn new(store: StateStore) -> Self {
        Self { store }
    }
}

impl StateValidator for StateFileValidator {
    fn validate(&self, state: &State) -> Result<(), ValidationError> {
        let dir = self.store.dir().to_path_buf();
        if !self.store.exists() {
            return Err(ValidationError::StateNotFound { dir });
        }

        if state.iaas.is_empty() {
            return Err(ValidationError::MissingField { dir, field: "iaas" });
        }
        if state.env_id.is_empty() {
            return Err(ValidationError::MissingField {
                dir,
                field: "envID",
            });
        }

        Ok(())
    }
}
