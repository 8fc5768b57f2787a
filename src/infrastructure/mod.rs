//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - local file system and default paths
//! - `repositories/` - state repositories (JSON file, in-memory)

pub mod fs;
pub mod repositories;

pub use fs::LocalFs;
pub use repositories::{InMemoryStateRepository, JsonStateRepository};
