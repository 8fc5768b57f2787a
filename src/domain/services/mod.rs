//! Domain Services
//!
//! Stateless functions over domain entities:
//! - `listing` - filter, sort and paginate the lists
//! - `matrix` - permission matrix and checkbox reducer
//! - `validation` - role form checks

pub mod listing;
pub mod matrix;
pub mod validation;

pub use listing::{
    clamp_page, employee_page, paginate, role_page, total_pages, EmployeeQuery, Page,
    DEFAULT_PAGE_SIZE,
};
pub use matrix::{
    offered_permissions, permission_matrix, permission_matrix_page, toggle_module,
    toggle_permission, MatrixRow, PermissionCell,
};
pub use validation::{
    validate_permissions, validate_role_form, validate_role_name, ValidationError,
    ValidationErrors, MIN_ROLE_NAME_LEN,
};
