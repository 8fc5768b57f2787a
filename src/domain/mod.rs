//! Domain Layer
//!
//! Pure roster logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Employee, Role, RosterState
//! - `value_objects/` - Permission, PermissionSet, SortSpec, IdPolicy
//! - `catalog` - module catalog rendered in the permission matrix
//! - `services/` - listing, permission matrix, validation
//! - `ports/` - interface definitions for infrastructure

pub mod catalog;
pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
