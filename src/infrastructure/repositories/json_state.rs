//! JSON State Repository
//!
//! Implements the StateRepository port as a single JSON document stored
//! under a fixed key (`<data dir>/<key>.json`, key `root` by default).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Employee, Role, RosterState};
use crate::domain::ports::file_system::FileSystem;
use crate::domain::ports::state_repository::{StateError, StateRepository, StateResult};
use crate::infrastructure::fs::LocalFs;

/// Current layout version of the persisted document
pub const STATE_FORMAT_VERSION: u32 = 1;

/// Storage key used when the config does not override it
pub const DEFAULT_STATE_KEY: &str = "root";

/// On-disk layout of the roster state
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersistedState {
    version: u32,
    #[serde(default)]
    employees: Vec<Employee>,
    #[serde(default)]
    roles: Vec<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    next_role_id: Option<u32>,
}

/// Serialize state into the persisted JSON document
pub(crate) fn encode_state(state: &RosterState) -> StateResult<String> {
    let persisted = PersistedState {
        version: STATE_FORMAT_VERSION,
        employees: state.employees.clone(),
        roles: state.roles.clone(),
        next_role_id: state.next_role_id,
    };
    serde_json::to_string_pretty(&persisted).map_err(|e| StateError::ParseError(e.to_string()))
}

/// Parse a persisted JSON document, rejecting unknown layout versions
pub(crate) fn decode_state(content: &str) -> StateResult<RosterState> {
    let persisted: PersistedState =
        serde_json::from_str(content).map_err(|e| StateError::ParseError(e.to_string()))?;

    if persisted.version != STATE_FORMAT_VERSION {
        return Err(StateError::VersionMismatch {
            found: persisted.version,
            expected: STATE_FORMAT_VERSION,
        });
    }

    Ok(RosterState {
        employees: persisted.employees,
        roles: persisted.roles,
        next_role_id: persisted.next_role_id,
    })
}

/// File-backed state repository
pub struct JsonStateRepository<FS: FileSystem = LocalFs> {
    path: PathBuf,
    fs: FS,
}

impl JsonStateRepository<LocalFs> {
    /// Store state under `dir/<key>.json` on the local disk
    pub fn new(dir: impl AsRef<Path>, key: &str) -> Self {
        Self::with_fs(dir, key, LocalFs::new())
    }
}

impl<FS: FileSystem> JsonStateRepository<FS> {
    /// Create with a custom file system (for testing)
    pub fn with_fs(dir: impl AsRef<Path>, key: &str, fs: FS) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", key)),
            fs,
        }
    }

    /// Location of the state document
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<FS: FileSystem> StateRepository for JsonStateRepository<FS> {
    fn load(&self) -> StateResult<Option<RosterState>> {
        if !self.fs.exists(&self.path) {
            return Ok(None);
        }

        let content = self
            .fs
            .read(&self.path)
            .map_err(|e| StateError::IoError(e.to_string()))?;
        decode_state(&content).map(Some)
    }

    fn save(&self, state: &RosterState) -> StateResult<()> {
        let content = encode_state(state)?;
        self.fs
            .write(&self.path, &content)
            .map_err(|e| StateError::IoError(e.to_string()))
    }

    fn clear(&self) -> StateResult<()> {
        if self.fs.exists(&self.path) {
            self.fs
                .remove(&self.path)
                .map_err(|e| StateError::IoError(e.to_string()))?;
        }
        Ok(())
    }
}
