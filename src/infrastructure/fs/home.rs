//! Default locations for the user config file and the state directory.
//!
//! `ROSTER_TEST_HOME` overrides the platform directories so integration tests
//! never touch the real user profile. `dirs` resolves platform locations in
//! production.

use std::path::PathBuf;

/// Environment variable for test isolation of the home directory.
pub const ROSTER_TEST_HOME_VAR: &str = "ROSTER_TEST_HOME";

fn test_home() -> Option<PathBuf> {
    std::env::var_os(ROSTER_TEST_HOME_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// `~/.config/roster/config.toml` (platform config dir in production)
pub fn user_config_path() -> Option<PathBuf> {
    let base = match test_home() {
        Some(home) => home.join(".config"),
        None => dirs::config_dir()?,
    };
    Some(base.join("roster").join("config.toml"))
}

/// Directory holding persisted state when the config does not name one
pub fn default_data_dir() -> Option<PathBuf> {
    let base = match test_home() {
        Some(home) => home.join(".local").join("share"),
        None => dirs::data_dir()?,
    };
    Some(base.join("roster"))
}
