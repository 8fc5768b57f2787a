//! In-memory State Repository
//!
//! Keeps the encoded JSON document in memory. Clones share the same slot,
//! so a test can hand one clone to the store and inspect the other.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::entities::RosterState;
use crate::domain::ports::state_repository::{StateRepository, StateResult};

use super::json_state::{decode_state, encode_state};

#[derive(Debug, Clone, Default)]
pub struct InMemoryStateRepository {
    slot: Arc<Mutex<Option<String>>>,
    saves: Arc<AtomicUsize>,
}

impl InMemoryStateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a document already saved
    pub fn with_state(state: &RosterState) -> StateResult<Self> {
        let repo = Self::new();
        repo.save(state)?;
        repo.saves.store(0, Ordering::SeqCst);
        Ok(repo)
    }

    /// The raw saved document, if any
    pub fn document(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of successful `save` calls
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl StateRepository for InMemoryStateRepository {
    fn load(&self) -> StateResult<Option<RosterState>> {
        self.document().as_deref().map(decode_state).transpose()
    }

    fn save(&self, state: &RosterState) -> StateResult<()> {
        let encoded = encode_state(state)?;
        *self
            .slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(encoded);
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn clear(&self) -> StateResult<()> {
        *self
            .slot
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
        Ok(())
    }
}
