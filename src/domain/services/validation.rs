//! Role form validation
//!
//! Runs before any store mutation. Each field reports at most one error.

use thiserror::Error;

use crate::domain::value_objects::{has_any_permission, ModuleGrants};

/// Shortest accepted role name, after trimming
pub const MIN_ROLE_NAME_LEN: usize = 3;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Role name is required")]
    InvalidName,
    #[error("Role name must be at least 3 characters")]
    TooShort,
    #[error("Role name can only contain letters")]
    InvalidCharacters,
    #[error("Select at least one permission")]
    NoPermissionsSelected,
}

/// Per-field failures of a role form submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub name: Option<ValidationError>,
    pub permissions: Option<ValidationError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.permissions.is_none()
    }

    pub fn iter(&self) -> impl Iterator<Item = ValidationError> + '_ {
        self.name.iter().chain(self.permissions.iter()).copied()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<String> = self.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Name is checked on its trimmed form: required, then length, then letters only
pub fn validate_role_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::InvalidName);
    }
    if trimmed.chars().count() < MIN_ROLE_NAME_LEN {
        return Err(ValidationError::TooShort);
    }
    if !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::InvalidCharacters);
    }
    Ok(())
}

pub fn validate_permissions(selected: &ModuleGrants) -> Result<(), ValidationError> {
    if has_any_permission(selected) {
        Ok(())
    } else {
        Err(ValidationError::NoPermissionsSelected)
    }
}

/// Check both fields and report every failing one
pub fn validate_role_form(name: &str, selected: &ModuleGrants) -> Result<(), ValidationErrors> {
    let errors = ValidationErrors {
        name: validate_role_name(name).err(),
        permissions: validate_permissions(selected).err(),
    };
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
