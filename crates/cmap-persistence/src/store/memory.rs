//! In-process store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use super::StateStore;
use crate::error::{PersistenceError, Result};

/// Key/value store held in memory, with an optional size quota.
///
/// Behaves like browser local storage: documents are strings and a write
/// that would push the total size over the quota is refused.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: Mutex<HashMap<String, String>>,
    quota: Option<usize>,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the total stored bytes (keys + documents).
    pub fn with_quota(quota: usize) -> Self {
        Self {
            quota: Some(quota),
            ..Self::default()
        }
    }

    /// Put a raw document in place without counting it as a write.
    pub fn seed(&self, key: &str, contents: &str) {
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), contents.to_string());
    }

    /// Raw document under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl StateStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.raw(key))
    }

    fn write(&self, key: &str, contents: &str) -> Result<()> {
        let mut documents = self
            .documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(quota) = self.quota {
            let others: usize = documents
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let needed = others + key.len() + contents.len();
            if needed > quota {
                return Err(PersistenceError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    quota,
                });
            }
        }

        documents.insert(key.to_string(), contents.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
