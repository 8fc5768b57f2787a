//! Command handlers
//!
//! One module per top-level subcommand. Handlers print their own output
//! (text or JSON) and return errors for `main` to report.

pub mod employees;
pub mod modules;
pub mod reset;
pub mod roles;

use anyhow::{Context as _, Result};
use serde_json::json;

use roster::config::Config;
use roster::domain::services::{clamp_page, ValidationErrors};
use roster::presentation::output::{print_json, render_validation_errors};
use roster::presentation::{open_store, ConcreteStore, OutputFormat};

/// Settings shared by every command
pub struct Context {
    pub config: Config,
    pub format: OutputFormat,
}

impl Context {
    pub fn new(config: Config, json: bool) -> Self {
        Self {
            config,
            format: OutputFormat::from_json_flag(json),
        }
    }

    pub fn open_store(&self) -> Result<ConcreteStore> {
        open_store(&self.config).with_context(|| {
            format!(
                "failed to open roster state in {}",
                self.config.data_dir().display()
            )
        })
    }

    pub fn page_size(&self) -> usize {
        self.config.view.page_size
    }

    /// Requested page pulled into range for a list of `total` items
    pub fn clamp(&self, page: usize, total: usize) -> usize {
        clamp_page(page, total, self.page_size())
    }

    /// Report a completed mutation
    pub fn notify(&self, message: &str, data: serde_json::Value) -> Result<()> {
        if self.format.is_json() {
            print_json(&json!({
                "ok": true,
                "message": message,
                "data": data,
            }))?;
        } else {
            println!("{}", message);
        }
        Ok(())
    }

    /// Report rejected form fields; the returned error only sets the exit code
    pub fn reject(&self, errors: &ValidationErrors) -> Result<()> {
        if self.format.is_json() {
            print_json(&json!({
                "ok": false,
                "errors": {
                    "name": errors.name.map(|e| e.to_string()),
                    "permissions": errors.permissions.map(|e| e.to_string()),
                },
            }))?;
        } else {
            eprintln!("Role form rejected:");
            eprint!("{}", render_validation_errors(errors));
        }
        Err(FormRejected.into())
    }
}

/// Form errors already printed by [`Context::reject`]
#[derive(Debug, thiserror::Error)]
#[error("role form rejected")]
pub struct FormRejected;
