//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::application::{EmployeeListState, RoleListState, SEARCH_DEBOUNCE_MS};
use crate::domain::catalog::{ModuleCatalog, ModuleDefinition};
use crate::domain::services::DEFAULT_PAGE_SIZE;
use crate::domain::value_objects::IdPolicy;
use crate::error::RosterResult;
use crate::infrastructure::fs::default_data_dir;
use crate::infrastructure::repositories::DEFAULT_STATE_KEY;

use super::loader::{self, ConfigWarning};

/// Where the roster state is persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory of the state document; platform data dir when unset
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Storage key, the file stem of the state document
    #[serde(default = "default_key")]
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            key: default_key(),
        }
    }
}

fn default_key() -> String {
    DEFAULT_STATE_KEY.to_string()
}

/// List and search behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            search_debounce_ms: default_search_debounce_ms(),
        }
    }
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_search_debounce_ms() -> u64 {
    SEARCH_DEBOUNCE_MS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RolesConfig {
    #[serde(default)]
    pub id_policy: IdPolicy,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub view: ViewConfig,

    #[serde(default)]
    pub roles: RolesConfig,

    /// Module catalog override; the built-in catalog when empty
    #[serde(default)]
    pub modules: Vec<ModuleDefinition>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> RosterResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> RosterResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load the explicit file, else the user config, else defaults; then apply env
    pub fn load_or_default(explicit: Option<&Path>) -> RosterResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(explicit)
    }

    /// Apply environment variable overrides (ROSTER_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    /// Modules offered by the permission matrix
    pub fn catalog(&self) -> ModuleCatalog {
        if self.modules.is_empty() {
            ModuleCatalog::default()
        } else {
            ModuleCatalog::new(self.modules.clone())
        }
    }

    /// Directory holding the state document
    pub fn data_dir(&self) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .or_else(default_data_dir)
            .unwrap_or_else(|| PathBuf::from(".roster"))
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.view.search_debounce_ms)
    }

    /// Employee list sized and debounced per `[view]`
    pub fn employee_list_state(&self) -> EmployeeListState {
        EmployeeListState::new(self.view.page_size, self.search_debounce())
    }

    pub fn role_list_state(&self) -> RoleListState {
        RoleListState::new(self.view.page_size)
    }
}
