//! Tests for the config module

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use tempfile::tempdir;

use super::loader::with_env_overrides;
use super::types::*;
use crate::domain::value_objects::{IdPolicy, Permission};
use crate::error::RosterError;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.storage.key, "root");
    assert_eq!(config.storage.data_dir, None);
    assert_eq!(config.view.page_size, 5);
    assert_eq!(config.view.search_debounce_ms, 400);
    assert_eq!(config.roles.id_policy, IdPolicy::Count);
    assert_eq!(config.catalog().len(), 5);
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[storage]
data_dir = "/var/lib/roster"
key = "staff"

[view]
page_size = 10

[roles]
id_policy = "monotonic"
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.storage.data_dir, Some(PathBuf::from("/var/lib/roster")));
    assert_eq!(config.storage.key, "staff");
    assert_eq!(config.view.page_size, 10);
    assert_eq!(config.view.search_debounce_ms, 400);
    assert_eq!(config.roles.id_policy, IdPolicy::Monotonic);
    assert_eq!(config.data_dir(), PathBuf::from("/var/lib/roster"));
}

#[test]
fn test_config_module_catalog_override() {
    let toml = r#"
[[modules]]
name = "Payroll"
permissions = ["View", "Update"]

[[modules]]
name = "Audit"
"#;

    let config: Config = toml::from_str(toml).unwrap();
    let catalog = config.catalog();

    assert_eq!(catalog.len(), 2);
    assert_eq!(
        catalog.get("Payroll").unwrap().permissions,
        vec![Permission::View, Permission::Update]
    );
    assert_eq!(
        catalog.get("Audit").unwrap().permissions,
        Permission::CONCRETE.to_vec()
    );
}

#[test]
fn test_env_overrides() {
    let config = with_env_overrides(
        Config::default(),
        env(&[
            ("ROSTER_DATA_DIR", "/tmp/roster-data"),
            ("ROSTER_PAGE_SIZE", "8"),
            ("ROSTER_ID_POLICY", "monotonic"),
            ("ROSTER_SEARCH_DEBOUNCE_MS", "0"),
        ]),
    );

    assert_eq!(config.storage.data_dir, Some(PathBuf::from("/tmp/roster-data")));
    assert_eq!(config.view.page_size, 8);
    assert_eq!(config.roles.id_policy, IdPolicy::Monotonic);
    assert_eq!(config.view.search_debounce_ms, 0);
}

#[test]
fn test_env_overrides_ignore_garbage() {
    let config = with_env_overrides(
        Config::default(),
        env(&[
            ("ROSTER_PAGE_SIZE", "lots"),
            ("ROSTER_ID_POLICY", "random"),
            ("ROSTER_DATA_DIR", ""),
        ]),
    );

    assert_eq!(config, Config::default());
}

// === Unknown key warnings ===

#[test]
fn test_config_load_with_warnings_reports_unknown_key_with_suggestion() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[view]\npage_sise = 3\n").unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();

    assert_eq!(config.view.page_size, 5);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "page_sise");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion, Some("page_size".to_string()));
    assert!(warnings[0].to_string().contains("did you mean 'page_size'"));
}

#[test]
fn test_config_load_without_unknown_keys_has_no_warnings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[roles]\nid_policy = \"count\"\n").unwrap();

    let (_config, warnings) = Config::load_with_warnings(&path).unwrap();
    assert!(warnings.is_empty());
}

// === Rejected values ===

#[test]
fn test_config_rejects_zero_page_size() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[view]\npage_size = 0\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    match err {
        RosterError::InvalidConfig { file, message } => {
            assert_eq!(file, path);
            assert!(message.contains("page_size"));
        }
        other => panic!("expected InvalidConfig, got {other}"),
    }
}

#[test]
fn test_config_rejects_malformed_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[roles]\nid_policy = \"sometimes\"\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, RosterError::InvalidConfig { .. }));
}

#[test]
fn test_load_or_default_explicit_file_must_exist() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = Config::load_or_default(Some(&missing)).unwrap_err();
    assert!(matches!(err, RosterError::Io(_)));
}

#[test]
fn test_load_or_default_reads_explicit_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("roster.toml");
    fs::write(&path, "[storage]\nkey = \"staff\"\n").unwrap();

    let (config, warnings) = Config::load_or_default(Some(&path)).unwrap();
    assert_eq!(config.storage.key, "staff");
    assert!(warnings.is_empty());
}

#[test]
fn test_list_states_follow_view_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[view]\npage_size = 3\nsearch_debounce_ms = 50\n").unwrap();
    let config = Config::load(&path).unwrap();

    let mut employees = config.employee_list_state();
    assert_eq!(employees.pager().page_size(), 3);
    assert_eq!(employees.debounce(), Duration::from_millis(50));
    assert_eq!(config.role_list_state().pager().page_size(), 3);

    // 50ms is past the configured window but well inside the default one
    let start = Instant::now();
    employees.type_search("bob", start);
    assert!(employees.tick(start + Duration::from_millis(50)));
    assert_eq!(employees.search(), "bob");

    let mut stock = Config::default().employee_list_state();
    stock.type_search("bob", start);
    assert!(!stock.tick(start + Duration::from_millis(50)));
    assert_eq!(stock.search(), "");
}
