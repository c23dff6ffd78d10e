//! Ordered multi-selection keyed by row identity.

use std::collections::HashSet;
use std::hash::Hash;

/// What a toggle did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Added,
    Removed,
}

/// Tracks selected keys, remembering the order they were selected in.
///
/// Membership is answered from a hash set; the order vector is what gets
/// reported back to callers.
#[derive(Debug, Clone)]
pub struct Selection<K: Clone + Eq + Hash> {
    order: Vec<K>,
    members: HashSet<K>,
}

impl<K: Clone + Eq + Hash> Default for Selection<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + Eq + Hash> Selection<K> {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            members: HashSet::new(),
        }
    }

    /// Remove `key` if selected, otherwise append it.
    pub fn toggle(&mut self, key: K) -> SelectionChange {
        if self.members.remove(&key) {
            self.order.retain(|k| k != &key);
            SelectionChange::Removed
        } else {
            self.members.insert(key.clone());
            self.order.push(key);
            SelectionChange::Added
        }
    }

    /// Check if a key is selected.
    pub fn contains(&self, key: &K) -> bool {
        self.members.contains(key)
    }

    /// Selected keys in the order they were selected.
    pub fn keys(&self) -> &[K] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Drop every key for which `keep` returns false. Returns how many were dropped.
    pub fn retain(&mut self, mut keep: impl FnMut(&K) -> bool) -> usize {
        let before = self.order.len();
        self.order.retain(|k| keep(k));
        if self.order.len() != before {
            self.members = self.order.iter().cloned().collect();
        }
        before - self.order.len()
    }
}
