//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod id_policy;
mod permission;
mod sort;

pub use id_policy::IdPolicy;
pub use permission::{has_any_permission, ModuleGrants, Permission, PermissionSet};
pub use sort::{SortDirection, SortKey, SortSpec};
