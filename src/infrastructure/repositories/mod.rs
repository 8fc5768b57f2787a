//! Repository Implementations
//!
//! Concrete implementations of the StateRepository port.

mod json_state;
mod memory;

pub use json_state::{JsonStateRepository, DEFAULT_STATE_KEY, STATE_FORMAT_VERSION};
pub use memory::InMemoryStateRepository;
