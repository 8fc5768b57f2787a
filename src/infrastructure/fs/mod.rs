//! File System Implementations
//!
//! Concrete implementations of the FileSystem port and path resolution.

mod home;
mod local;

pub use home::{default_data_dir, user_config_path, ROSTER_TEST_HOME_VAR};
pub use local::LocalFs;
