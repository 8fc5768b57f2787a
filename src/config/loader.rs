//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{RosterError, RosterResult};
use crate::infrastructure::fs::user_config_path;

use super::types::Config;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> RosterResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| RosterError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings: Vec<ConfigWarning> = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    for warning in &warnings {
        warn!("{}", warning);
    }
    validate(&config, path)?;

    Ok((config, warnings))
}

/// Explicit config file, else the user config if present, else defaults.
///
/// Environment overrides are applied last and the result is validated again.
pub fn load_or_default(explicit: Option<&Path>) -> RosterResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings, source) = match explicit {
        Some(path) => {
            let (config, warnings) = load_with_warnings(path)?;
            (config, warnings, path.to_path_buf())
        }
        None => match user_config_path().filter(|p| p.exists()) {
            Some(path) => {
                debug!(path = %path.display(), "loading user config");
                let (config, warnings) = load_with_warnings(&path)?;
                (config, warnings, path)
            }
            None => (Config::default(), Vec::new(), PathBuf::from("<defaults>")),
        },
    };

    let config = with_env_overrides(config, |key| std::env::var(key).ok());
    validate(&config, &source)?;
    Ok((config, warnings))
}

/// Apply environment variable overrides (ROSTER_* prefix).
///
/// Unparsable values are logged and ignored.
pub fn with_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = lookup("ROSTER_DATA_DIR").filter(|v| !v.is_empty()) {
        config.storage.data_dir = Some(PathBuf::from(dir));
    }

    if let Some(value) = lookup("ROSTER_PAGE_SIZE") {
        match value.trim().parse() {
            Ok(size) => config.view.page_size = size,
            Err(_) => warn!(value = %value, "ignoring invalid ROSTER_PAGE_SIZE"),
        }
    }

    if let Some(value) = lookup("ROSTER_ID_POLICY") {
        match value.parse() {
            Ok(policy) => config.roles.id_policy = policy,
            Err(e) => warn!("ignoring ROSTER_ID_POLICY: {}", e),
        }
    }

    if let Some(value) = lookup("ROSTER_SEARCH_DEBOUNCE_MS") {
        match value.trim().parse() {
            Ok(ms) => config.view.search_debounce_ms = ms,
            Err(_) => warn!(value = %value, "ignoring invalid ROSTER_SEARCH_DEBOUNCE_MS"),
        }
    }

    config
}

fn validate(config: &Config, source: &Path) -> RosterResult<()> {
    let invalid = |message: String| RosterError::InvalidConfig {
        file: source.to_path_buf(),
        message,
    };

    if config.view.page_size == 0 {
        return Err(invalid("view.page_size must be at least 1".to_string()));
    }
    if config.storage.key.trim().is_empty() {
        return Err(invalid("storage.key must not be empty".to_string()));
    }
    if let Some(module) = config.modules.iter().find(|m| m.name.trim().is_empty()) {
        return Err(invalid(format!(
            "module with permissions {:?} has no name",
            module.permissions
        )));
    }
    Ok(())
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "storage",
        "data_dir",
        "key",
        "view",
        "page_size",
        "search_debounce_ms",
        "roles",
        "id_policy",
        "modules",
        "name",
        "permissions",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let b_bytes = b.as_bytes();
    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a.as_bytes().iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_bytes.len()]
}
