//! Recently used stickers
//!
//! A bounded most-recent-first list, deduplicated by file id, persisted as a
//! JSON array under one key of a [`KeyValueStore`].
//!
//! Reads for display never fail: a missing key, an unreadable store or
//! corrupt JSON all read as an empty list. `record_use` refuses to write when
//! the store cannot be read, so stored history is never replaced blindly.

use crate::store::KeyValueStore;
use parking_lot::Mutex;
use stickers_core::{Error, Result, Selection};
use tracing::{debug, warn};

/// Bounded MRU list of selections
pub struct RecencyTracker<S> {
    store: S,
    key: String,
    capacity: usize,
    /// Serialises read-modify-write cycles
    write_lock: Mutex<()>,
}

impl<S: KeyValueStore> RecencyTracker<S> {
    /// Track up to `capacity` selections under `key` in `store`
    pub fn new(store: S, key: impl Into<String>, capacity: usize) -> Self {
        RecencyTracker {
            store,
            key: key.into(),
            capacity,
            write_lock: Mutex::new(()),
        }
    }

    /// Move `selection` to the front, dropping any older entry for the same
    /// file, then trim to capacity and persist.
    pub fn record_use(&self, selection: impl Into<Selection>) -> Result<()> {
        let selection = selection.into();
        let _guard = self.write_lock.lock();

        let mut list = self.try_load().map_err(|e| {
            warn!(target: "stickers::recency", key = %self.key, error = %e, "Recency read failed, use not recorded");
            Error::Persistence(format!("cannot read '{}': {}", self.key, e))
        })?;
        list.retain(|s| s.file_id() != selection.file_id());
        debug!(target: "stickers::recency", file_id = selection.file_id(), "Recording use");
        list.insert(0, selection);
        list.truncate(self.capacity);

        let json = serde_json::to_string(&list)?;
        self.store.set(&self.key, &json)
    }

    /// Up to `limit` most recent selections (all of them when `None`)
    pub fn recent_list(&self, limit: Option<usize>) -> Vec<Selection> {
        let mut list = self.load();
        list.truncate(limit.unwrap_or(self.capacity).min(self.capacity));
        list
    }

    /// File ids of [`recent_list`](Self::recent_list)
    pub fn recent_ids(&self, limit: Option<usize>) -> Vec<String> {
        self.recent_list(limit)
            .into_iter()
            .map(|s| s.file_id().to_string())
            .collect()
    }

    /// Forget everything
    pub fn clear(&self) -> Result<()> {
        let _guard = self.write_lock.lock();
        self.store.set(&self.key, "[]")
    }

    /// Maximum entries kept
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Storage key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stored list for display; any failure reads as empty
    fn load(&self) -> Vec<Selection> {
        self.try_load().unwrap_or_else(|e| {
            warn!(target: "stickers::recency", key = %self.key, error = %e, "Recency read failed, using empty list");
            Vec::new()
        })
    }

    /// Stored list, failing only when the store itself cannot be read.
    ///
    /// Corrupt JSON reads as empty so the next write replaces it.
    fn try_load(&self) -> Result<Vec<Selection>> {
        let raw = match self.store.get(&self.key)? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };

        let list: Vec<Selection> = match serde_json::from_str(&raw) {
            Ok(list) => list,
            Err(e) => {
                warn!(target: "stickers::recency", key = %self.key, error = %e, "Recency data corrupt, using empty list");
                return Ok(Vec::new());
            }
        };

        // Data written by another deployment may break our invariants
        let mut seen = std::collections::HashSet::new();
        Ok(list
            .into_iter()
            .filter(|s| seen.insert(s.file_id().to_string()))
            .collect())
    }
}
