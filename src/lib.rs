//! Roster - employee role and per-module permission management
//!
//! Roster keeps a fixed list of employees and a user-defined list of roles.
//! Each role grants permissions (All, View, Add, Update, Delete) per
//! application module, and employees hold any number of roles. State is
//! persisted locally after every change and restored on the next start.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{EmployeeListState, RoleForm, RoleListState, Store, SubmitOutcome};
pub use config::Config;
pub use domain::catalog::{ModuleCatalog, ModuleDefinition};
pub use domain::entities::{Employee, Role, RoleDraft, RoleStatus, RosterState};
pub use domain::value_objects::{IdPolicy, ModuleGrants, Permission, PermissionSet};
pub use error::{RosterError, RosterResult};
