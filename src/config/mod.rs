//! Configuration module for roster
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ROSTER_*)
//! 3. Config file (`--config PATH` or ~/.config/roster/config.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{with_env_overrides, ConfigWarning};
pub use types::{Config, RolesConfig, StorageConfig, ViewConfig};
