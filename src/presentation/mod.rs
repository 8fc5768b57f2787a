//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Opening the store with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates the store with proper dependencies (dependency injection)
//! - `output` - Output rendering
//!
//! ## Usage
//!
//! ```ignore
//! use roster::config::Config;
//! use roster::presentation::factory;
//!
//! let (config, _warnings) = Config::load_or_default(None)?;
//! let mut store = factory::open_store(&config)?;
//! store.assign_role(1, 1)?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use factory::{open_store, ConcreteStore};
pub use output::OutputFormat;
