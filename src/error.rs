//! Error types for roster
//!
//! Library code returns `RosterError` (built with `thiserror`); the binary
//! wraps it in `anyhow` for context.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::ports::StateError;
use crate::domain::services::ValidationErrors;

/// Result type alias for roster operations
pub type RosterResult<T> = Result<T, RosterError>;

/// Main error type for roster operations
#[derive(Error, Debug)]
pub enum RosterError {
    /// Role form input was rejected; nothing was written
    #[error("role form rejected: {0}")]
    Validation(#[from] ValidationErrors),

    /// No role with this id (edit form lookup)
    #[error("role {id} not found")]
    RoleNotFound { id: u32 },

    /// No employee with this id
    #[error("employee {id} not found")]
    EmployeeNotFound { id: u32 },

    /// Persisted state could not be read or written
    #[error(transparent)]
    State(#[from] StateError),

    /// Configuration file is malformed or holds an unusable value
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RosterError {
    /// Whether the error came from form validation (user can correct input)
    pub fn is_validation(&self) -> bool {
        matches!(self, RosterError::Validation(_))
    }
}
