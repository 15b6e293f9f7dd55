//! Convoy registry

use std::collections::VecDeque;
use std::sync::RwLock;

use crate::models::convoy::{Convoy, ConvoyStatus};

/// Session-lifetime convoy list, newest first
///
/// Records are never removed or updated in place, and ids are not checked
/// for uniqueness.
pub struct ConvoyRegistry {
    entries: RwLock<VecDeque<Convoy>>,
}

impl ConvoyRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(VecDeque::new()),
        }
    }

    /// Create a registry holding `convoys` in the given order
    pub fn with_seed(convoys: Vec<Convoy>) -> Self {
        Self {
            entries: RwLock::new(convoys.into()),
        }
    }

    /// Put a convoy at the front of the list
    pub fn prepend(&self, convoy: Convoy) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.push_front(convoy);
    }

    /// Snapshot of every convoy in order
    pub fn list(&self) -> Vec<Convoy> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.iter().cloned().collect()
    }

    /// First convoy with the given id
    pub fn get(&self, id: &str) -> Option<Convoy> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.iter().find(|c| c.id == id).cloned()
    }

    pub fn count_by_status(&self, status: ConvoyStatus) -> usize {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.iter().filter(|c| c.status == status).count()
    }

    pub fn len(&self) -> usize {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ConvoyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
