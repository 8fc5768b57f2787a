//! StateRepository port - abstraction for roster state persistence
//!
//! The store writes the whole state through this trait after every
//! change and reads it back once at startup.

use thiserror::Error;

use crate::domain::entities::RosterState;

/// Result type for state persistence operations
pub type StateResult<T> = Result<T, StateError>;

/// State persistence errors
#[derive(Debug, Error)]
pub enum StateError {
    #[error("state storage I/O error: {0}")]
    IoError(String),

    #[error("state storage is corrupted: {0}")]
    ParseError(String),

    #[error(
        "state format incompatible (found version {found}, expected {expected}); \
         run `roster reset --yes` to start over"
    )]
    VersionMismatch { found: u32, expected: u32 },
}

/// Abstract repository for the persisted roster state
pub trait StateRepository {
    /// Read the last saved state; `Ok(None)` when nothing was saved yet
    fn load(&self) -> StateResult<Option<RosterState>>;

    /// Replace the saved state
    fn save(&self, state: &RosterState) -> StateResult<()>;

    /// Forget the saved state
    fn clear(&self) -> StateResult<()>;
}
