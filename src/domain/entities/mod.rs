//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `Employee` - a person holding zero or more roles
//! - `Role` - a named bundle of per-module permissions
//! - `RosterState` - both collections, persisted as one unit

mod employee;
mod role;
mod state;

pub use employee::Employee;
pub use role::{Role, RoleDraft, RoleStatus};
pub use state::{RosterState, SEED_EMPLOYEES};
