//! In-memory status store

use crate::StoreError;
use scout_domain::traits::StatusStore;
use scout_domain::{EnrichStatus, StatusUpdate};
use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Default)]
struct MemoryState {
    updates: Vec<StatusUpdate>,
    failing: HashSet<EnrichStatus>,
}

/// StatusStore that keeps every write in memory
///
/// Clones share the same log. Writes for a status registered with
/// [`fail_on`](Self::fail_on) are rejected and not recorded.
#[derive(Debug, Clone, Default)]
pub struct MemoryStatusStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStatusStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every write of `status`
    pub fn fail_on(self, status: EnrichStatus) -> Self {
        self.lock().failing.insert(status);
        self
    }

    /// All accepted writes, oldest first
    pub fn updates(&self) -> Vec<StatusUpdate> {
        self.lock().updates.clone()
    }

    /// Statuses of all accepted writes, oldest first
    pub fn statuses(&self) -> Vec<EnrichStatus> {
        self.lock().updates.iter().map(|u| u.status).collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StatusStore for MemoryStatusStore {
    type Error = StoreError;

    async fn set_status(&self, update: StatusUpdate) -> Result<(), Self::Error> {
        let mut state = self.lock();
        if state.failing.contains(&update.status) {
            return Err(StoreError::Simulated(update.status));
        }
        state.updates.push(update);
        Ok(())
    }
}
