// src/services/roster_service.rs
//
// Roster Index - ordered list of roster references for the session.
//
// Loaded exactly once, from the cache when possible, otherwise from the
// remote catalog (then persisted best-effort). Never refreshed.

use log::info;
use std::sync::{Arc, OnceLock};

use crate::domain::RosterEntry;
use crate::error::{AppError, AppResult};
use crate::integrations::CatalogClient;
use crate::repositories::{CacheKey, RecordCache};

/// Where a `load` call found the roster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterSource {
    Cache,
    Remote,
    AlreadyLoaded,
}

pub struct RosterIndex {
    client: Arc<dyn CatalogClient>,
    cache: Arc<RecordCache>,
    limit: u32,
    entries: OnceLock<Vec<RosterEntry>>,
}

impl RosterIndex {
    pub fn new(client: Arc<dyn CatalogClient>, cache: Arc<RecordCache>, limit: u32) -> Self {
        Self {
            client,
            cache,
            limit,
            entries: OnceLock::new(),
        }
    }

    pub async fn load(&self) -> AppResult<RosterSource> {
        if self.entries.get().is_some() {
            return Ok(RosterSource::AlreadyLoaded);
        }

        if let Some(cached) = self.cache.load::<Vec<RosterEntry>>(&CacheKey::Roster) {
            info!("Loaded roster of {} entries from cache", cached.len());
            self.adopt(cached);
            return Ok(RosterSource::Cache);
        }

        info!("Fetching roster from the catalog (limit {})", self.limit);
        let fetched = self.client.fetch_roster_page(self.limit, 0).await?;
        self.cache.store_best_effort(&CacheKey::Roster, &fetched);
        self.adopt(fetched);
        Ok(RosterSource::Remote)
    }

    // First load wins if two ever race
    fn adopt(&self, entries: Vec<RosterEntry>) {
        let _ = self.entries.set(entries);
    }

    pub fn is_loaded(&self) -> bool {
        self.entries.get().is_some()
    }

    /// Number of entries; 0 before the roster is loaded
    pub fn len(&self) -> usize {
        self.entries.get().map(Vec::len).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn entries(&self) -> &[RosterEntry] {
        self.entries.get().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn at(&self, position: usize) -> AppResult<&RosterEntry> {
        let entries = self.entries.get().ok_or(AppError::RosterNotLoaded)?;
        entries.get(position).ok_or(AppError::OutOfBounds {
            position: position as i64,
            length: entries.len(),
        })
    }

    /// Bounds check for a signed, possibly negative position
    pub fn check_position(&self, position: i64) -> AppResult<usize> {
        let length = self.len();
        if position < 0 || position as usize >= length {
            return Err(AppError::OutOfBounds { position, length });
        }
        Ok(position as usize)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::db::create_memory_pool;
    use crate::repositories::SqliteRecordStore;

    pub fn memory_cache(capacity: u64) -> Arc<RecordCache> {
        let pool = Arc::new(create_memory_pool().unwrap());
        Arc::new(RecordCache::new(Arc::new(SqliteRecordStore::new(pool, capacity))))
    }

    pub fn roster(len: usize) -> Vec<RosterEntry> {
        (1..=len)
            .map(|id| {
                RosterEntry::new(
                    format!("entry-{}", id),
                    format!("https://pokeapi.co/api/v2/pokemon/{}/", id),
                )
            })
            .collect()
    }

    /// Catalog id encoded in a roster locator built by `roster`
    pub fn id_from_locator(locator: &str) -> u32 {
        locator
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .and_then(|id| id.parse().ok())
            .unwrap()
    }
}
