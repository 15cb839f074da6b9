// src/repositories/record_cache.rs
//
// Typed facade over the record store.
//
// Reads never fail: an absent, unreadable or undecodable entry is a miss.
// Writes are either checked (`store`) or best-effort (`store_best_effort`),
// the latter downgrading quota and storage failures to a logged skip.

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use crate::db::DatabaseStats;
use crate::error::AppResult;
use crate::repositories::cache_key::CacheKey;
use crate::repositories::record_store::RecordStore;

pub struct RecordCache {
    store: Arc<dyn RecordStore>,
}

impl RecordCache {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        match self.store.contains(key) {
            Ok(exists) => exists,
            Err(e) => {
                warn!("Cache lookup for {} failed: {}", key, e);
                false
            }
        }
    }

    /// Decoded value under `key`, or `None` on any kind of miss
    pub fn load<T: DeserializeOwned>(&self, key: &CacheKey) -> Option<T> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Cache read for {} failed: {}", key, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Discarding undecodable cache entry {}: {}", key, e);
                None
            }
        }
    }

    pub fn store<T: Serialize>(&self, key: &CacheKey, value: &T) -> AppResult<()> {
        let encoded = serde_json::to_string(value)?;
        self.store.set(key, &encoded)
    }

    /// Returns whether the value was persisted
    pub fn store_best_effort<T: Serialize>(&self, key: &CacheKey, value: &T) -> bool {
        match self.store(key, value) {
            Ok(()) => true,
            Err(e) if e.is_quota_exceeded() => {
                debug!("Not caching {}: {}", key, e);
                false
            }
            Err(e) => {
                warn!("Not caching {}: {}", key, e);
                false
            }
        }
    }

    /// Entry count and bytes held against the quota
    pub fn usage(&self) -> AppResult<DatabaseStats> {
        self.store.usage()
    }
}
