//! Store Factory
//!
//! Wires the configured repository into a `Store`.
//! This is the dependency injection point for the application.

use std::path::PathBuf;

use tracing::debug;

use crate::application::Store;
use crate::config::Config;
use crate::error::RosterResult;
use crate::infrastructure::JsonStateRepository;

/// Store backed by the JSON document on the local disk
pub type ConcreteStore = Store<JsonStateRepository>;

/// The state document location for a config
pub fn state_location(config: &Config) -> (PathBuf, String) {
    (config.data_dir(), config.storage.key.clone())
}

/// Open the store the config points at, seeding it on first use
pub fn open_store(config: &Config) -> RosterResult<ConcreteStore> {
    let (dir, key) = state_location(config);
    let repo = JsonStateRepository::new(&dir, &key);
    debug!(path = %repo.path().display(), policy = %config.roles.id_policy, "opening roster state");
    Store::open(repo, config.roles.id_policy)
}
