use super::error::{StateError, StateResult};
use super::types::{State, STATE_VERSION};
use std::path::{Path, PathBuf};
use tokio::fs;

pub const STATE_FILE: &str = "bbl-state.json";

/// Reads and writes `bbl-state.json` inside a state directory.
///
/// The store does not lock the file; callers must not run two commands
/// against the same directory at once.
#[derive(Debug, Clone)]
pub struct StateStore {
    dir: PathBuf,
}

impl StateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(STATE_FILE)
    }

    pub fn exists(&self) -> bool {
        self.path().is_file()
    }

    /// Loads the state, returning an empty default when no file exists yet.
    pub async fn load(&self) -> StateResult<State> {
        let path = self.path();
        let contents = match fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No state file at {}, using empty state", path.display());
                return Ok(State::default());
            }
            Err(source) => return Err(StateError::Read { path, source }),
        };

        serde_json::from_str(&contents).map_err(|source| StateError::Parse { path, source })
    }

    /// Writes the state through a temporary file so a crash never leaves a
    /// truncated `bbl-state.json` behind.
    pub async fn save(&self, state: &State) -> StateResult<()> {
        let mut state = state.clone();
        state.version = STATE_VERSION;
        let body = serde_json::to_string_pretty(&state)?;

        fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| StateError::Write {
                path: self.dir.clone(),
                source,
            })?;

        let path = self.path();
        let tmp = self.dir.join(format!(".{}.tmp", STATE_FILE));
        fs::write(&tmp, body)
            .await
            .map_err(|source| StateError::Write {
                path: tmp.clone(),
                source,
            })?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|source| StateError::Write {
                path: path.clone(),
                source,
            })?;

        tracing::debug!("Saved state to {}", path.display());
        Ok(())
    }

    pub async fn remove(&self) -> StateResult<()> {
        let path = self.path();
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StateError::Write { path, source }),
        }
    }
}
