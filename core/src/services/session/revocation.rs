//! In-memory set of revoked tokens

use std::collections::HashSet;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Tokens invalidated before their natural expiry.
///
/// Keyed by the raw token string. Entries live for the lifetime of the
/// process; nothing purges them once the token has expired. Every operation
/// takes the lock, so a completed `insert` is visible to every later
/// `contains`.
#[derive(Debug, Default)]
pub struct RevocationSet {
    entries: RwLock<HashSet<String>>,
}

impl RevocationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `token`; returns `false` if it was already present
    pub fn insert(&self, token: &str) -> bool {
        let mut entries = self.write();
        if entries.contains(token) {
            return false;
        }
        entries.insert(token.to_string())
    }

    /// Removes `token`; returns `false` if it was not present
    pub fn remove(&self, token: &str) -> bool {
        self.write().remove(token)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.read().contains(token)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A panicking holder cannot leave a HashSet half-inserted, so a
    // poisoned lock still guards a consistent set.
    fn read(&self) -> RwLockReadGuard<'_, HashSet<String>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashSet<String>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}
