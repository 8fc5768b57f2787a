//! Test environment builder for isolated roster testing.
//!
//! Provides `TestEnv` - an isolated home directory plus helpers to run the
//! roster CLI against it.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running a roster CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as a JSON document
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}):\n{}", self.stdout))
    }
}

/// Isolated test environment with a temp home directory.
///
/// Config and state both resolve under the temp home, so tests never see
/// the real user profile or each other's state.
pub struct TestEnv {
    pub home_dir: TempDir,
    roster_bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home_dir: tempfile::tempdir().expect("Failed to create temp home"),
            roster_bin: PathBuf::from(env!("CARGO_BIN_EXE_roster")),
        }
    }

    /// Get path relative to home directory
    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(relative)
    }

    /// Default location of the saved state
    pub fn state_path(&self) -> PathBuf {
        self.home_path(".local/share/roster/root.json")
    }

    /// Default location of the user config
    pub fn config_path(&self) -> PathBuf {
        self.home_path(".config/roster/config.toml")
    }

    pub fn read_state(&self) -> serde_json::Value {
        let content = std::fs::read_to_string(self.state_path())
            .unwrap_or_else(|e| panic!("Failed to read state file: {e}"));
        serde_json::from_str(&content).expect("state file is not JSON")
    }

    /// Write a file under the home directory
    pub fn write_home_file(&self, relative_path: &str, content: &str) {
        write_file(&self.home_path(relative_path), content);
    }

    pub fn write_config(&self, content: &str) {
        write_file(&self.config_path(), content);
    }

    /// Run roster CLI in this environment
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run roster CLI with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.roster_bin);
        cmd.current_dir(self.home_dir.path())
            .args(args)
            .env("ROSTER_TEST_HOME", self.home_dir.path())
            .env_remove("ROSTER_DATA_DIR")
            .env_remove("ROSTER_PAGE_SIZE")
            .env_remove("ROSTER_ID_POLICY")
            .env_remove("ROSTER_SEARCH_DEBOUNCE_MS")
            .env_remove("ROSTER_LOG")
            .env_remove("RUST_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute roster");
        output_to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(path, content).expect("Failed to write file");
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
