//! Application Layer
//!
//! Stateful workflows over the domain.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Owns the single authoritative state and its write-through
//!
//! ## Components
//!
//! - `Store` - employee/role state, persisted after every change
//! - `RoleForm` - create/edit role workflow
//! - `EmployeeListState` / `RoleListState` - search, sort and page position
//! - `Debouncer` - quiet-window commit for the search box

pub mod debounce;
pub mod list_state;
pub mod role_form;
pub mod store;

pub use debounce::{Debouncer, SEARCH_DEBOUNCE_MS};
pub use list_state::{EmployeeListState, Pager, RoleListState};
pub use role_form::{FormMode, RoleForm, SubmitOutcome};
pub use store::Store;
