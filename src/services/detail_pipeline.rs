// src/services/detail_pipeline.rs
//
// Detail Pipeline - cache lookup → remote fetch → slim → cache write.
//
// CRITICAL RULES:
// - A cached record is returned as-is: no network call, no refresh
// - A failed fetch writes nothing, nor does a record for the wrong id
// - Cache writes are best-effort; a record that could not be persisted is
//   still returned
// - Description failures never fail the detail

use log::{debug, warn};
use std::sync::Arc;

use crate::domain::{
    id_for_position, validate_detail_record, DescriptionRecord, DetailRecord,
};
use crate::error::AppResult;
use crate::integrations::CatalogClient;
use crate::repositories::{CacheKey, RecordCache};
use crate::services::roster_service::RosterIndex;

/// Result of warming a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarmOutcome {
    AlreadyCached,
    Fetched { persisted: bool },
}

/// Detail and description of one position, resolved independently
#[derive(Debug)]
pub struct EntryResolution {
    pub position: usize,
    pub id: u32,
    pub detail: AppResult<DetailRecord>,
    pub description: AppResult<String>,
}

pub struct DetailPipeline {
    client: Arc<dyn CatalogClient>,
    cache: Arc<RecordCache>,
    roster: Arc<RosterIndex>,
}

impl DetailPipeline {
    pub fn new(
        client: Arc<dyn CatalogClient>,
        cache: Arc<RecordCache>,
        roster: Arc<RosterIndex>,
    ) -> Self {
        Self {
            client,
            cache,
            roster,
        }
    }

    pub fn roster(&self) -> &Arc<RosterIndex> {
        &self.roster
    }

    /// Detail record of a roster position
    pub async fn resolve(&self, position: usize) -> AppResult<DetailRecord> {
        self.roster.at(position)?;
        let id = id_for_position(position);

        if let Some(record) = self.cached_detail(id) {
            debug!("Detail {} served from cache", id);
            return Ok(record);
        }

        let (record, _) = self.fetch_and_store(position).await?;
        Ok(record)
    }

    /// Detail and description together; fails only on an invalid position
    pub async fn resolve_entry(&self, position: usize) -> AppResult<EntryResolution> {
        self.roster.at(position)?;
        let id = id_for_position(position);

        let (detail, description) =
            tokio::join!(self.resolve(position), self.resolve_description(id));

        Ok(EntryResolution {
            position,
            id,
            detail,
            description,
        })
    }

    /// Populates `detail:{id}` for a position unless already present
    pub async fn warm_position(&self, position: usize) -> AppResult<WarmOutcome> {
        self.roster.at(position)?;

        if self.is_cached(id_for_position(position)) {
            return Ok(WarmOutcome::AlreadyCached);
        }

        let (_, persisted) = self.fetch_and_store(position).await?;
        Ok(WarmOutcome::Fetched { persisted })
    }

    /// Selected description text for a catalog id
    pub async fn resolve_description(&self, id: u32) -> AppResult<String> {
        let key = CacheKey::Description(id);

        let record = match self.cache.load::<DescriptionRecord>(&key) {
            Some(record) => {
                debug!("Description {} served from cache", id);
                record
            }
            None => {
                let record = self.client.fetch_description_payload(id).await?.slim();
                self.cache.store_best_effort(&key, &record);
                record
            }
        };

        Ok(record.select_text())
    }

    pub fn is_cached(&self, id: u32) -> bool {
        self.cache.contains(&CacheKey::Detail(id))
    }

    fn cached_detail(&self, id: u32) -> Option<DetailRecord> {
        let record: DetailRecord = self.cache.load(&CacheKey::Detail(id))?;
        match validate_detail_record(&record, id) {
            Ok(()) => Some(record),
            Err(e) => {
                warn!("Ignoring cached detail {}: {}", id, e);
                None
            }
        }
    }

    /// Fetch, slim and persist; returns the record and whether it was stored
    async fn fetch_and_store(&self, position: usize) -> AppResult<(DetailRecord, bool)> {
        let entry = self.roster.at(position)?;
        let id = id_for_position(position);

        debug!("Fetching detail {} ({})", id, entry.name);
        let record = self
            .client
            .fetch_detail_payload(&entry.detail_locator)
            .await?
            .slim();

        // Never cache a record that a later read would reject
        if let Err(e) = validate_detail_record(&record, id) {
            warn!("Not caching detail for position {}: {}", position, e);
            return Ok((record, false));
        }

        let persisted = self.cache.store_best_effort(&CacheKey::Detail(id), &record);
        Ok((record, persisted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NO_DESCRIPTION_TEXT;
    use crate::error::AppError;
    use crate::integrations::pokeapi::payload::fixtures::{raw_detail, raw_species};
    use crate::integrations::MockCatalogClient;
    use crate::services::roster_service::test_support::{id_from_locator, memory_cache, roster};

    async fn pipeline_with(
        client: MockCatalogClient,
        cache: Arc<RecordCache>,
        roster_len: usize,
    ) -> DetailPipeline {
        cache.store(&CacheKey::Roster, &roster(roster_len)).unwrap();
        let client: Arc<dyn CatalogClient> = Arc::new(client);
        let index = Arc::new(RosterIndex::new(Arc::clone(&client), Arc::clone(&cache), 151));
        index.load().await.unwrap();
        DetailPipeline::new(client, cache, index)
    }

    fn detail_by_locator(client: &mut MockCatalogClient, times: usize) {
        client
            .expect_fetch_detail_payload()
            .times(times)
            .returning(|locator| {
                let id = id_from_locator(locator);
                Ok(raw_detail(id, &format!("entry-{}", id)))
            });
    }

    #[tokio::test]
    async fn test_second_resolve_is_a_cache_hit() {
        let cache = memory_cache(1024 * 1024);
        let mut client = MockCatalogClient::new();
        detail_by_locator(&mut client, 1);

        let pipeline = pipeline_with(client, Arc::clone(&cache), 151).await;

        let first = pipeline.resolve(24).await.unwrap();
        let second = pipeline.resolve(24).await.unwrap();

        assert_eq!(first.id, 25);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[tokio::test]
    async fn test_every_position_is_stable_across_resolves() {
        let cache = memory_cache(16 * 1024 * 1024);
        let mut client = MockCatalogClient::new();
        detail_by_locator(&mut client, 151);

        let pipeline = pipeline_with(client, cache, 151).await;

        for position in 0..151 {
            let first = pipeline.resolve(position).await.unwrap();
            let second = pipeline.resolve(position).await.unwrap();
            assert_eq!(first.id as usize, position + 1);
            assert_eq!(first, second);
        }
    }

    #[tokio::test]
    async fn test_out_of_bounds_makes_no_request() {
        let pipeline = pipeline_with(MockCatalogClient::new(), memory_cache(1024 * 1024), 151).await;

        assert!(matches!(
            pipeline.resolve(151).await,
            Err(AppError::OutOfBounds { position: 151, length: 151 })
        ));
        assert!(pipeline.resolve_entry(200).await.is_err());
        assert!(pipeline.warm_position(151).await.is_err());
    }

    #[tokio::test]
    async fn test_failed_fetch_writes_nothing() {
        let cache = memory_cache(1024 * 1024);
        let mut client = MockCatalogClient::new();
        client
            .expect_fetch_detail_payload()
            .times(1)
            .returning(|_| Err(AppError::Network("connection reset".to_string())));

        let pipeline = pipeline_with(client, Arc::clone(&cache), 151).await;

        let other = raw_detail(2, "entry-2").slim();
        cache.store(&CacheKey::Detail(2), &other).unwrap();

        assert!(matches!(pipeline.resolve(0).await, Err(AppError::Network(_))));
        assert!(!cache.contains(&CacheKey::Detail(1)));
        assert_eq!(cache.load::<DetailRecord>(&CacheKey::Detail(2)), Some(other));
    }

    #[tokio::test]
    async fn test_quota_exceeded_still_returns_record() {
        let roster_bytes = serde_json::to_string(&roster(3)).unwrap().len() as u64;
        let cache = memory_cache(roster_bytes + 16);
        let mut client = MockCatalogClient::new();
        detail_by_locator(&mut client, 2);

        let pipeline = pipeline_with(client, Arc::clone(&cache), 3).await;

        let record = pipeline.resolve(0).await.unwrap();
        assert_eq!(record.name, "entry-1");
        assert!(!cache.contains(&CacheKey::Detail(1)));

        // Not persisted, so the next resolve goes back to the network
        pipeline.resolve(0).await.unwrap();
        assert_eq!(cache.usage().unwrap().value_bytes as u64, roster_bytes);
    }

    #[tokio::test]
    async fn test_corrupt_cached_detail_is_refetched() {
        let cache = memory_cache(1024 * 1024);
        let mut client = MockCatalogClient::new();
        detail_by_locator(&mut client, 2);

        let pipeline = pipeline_with(client, Arc::clone(&cache), 151).await;

        cache.store(&CacheKey::Detail(1), &"garbage").unwrap();
        assert_eq!(pipeline.resolve(0).await.unwrap().id, 1);

        // A record stored under the wrong id is treated the same way
        cache
            .store(&CacheKey::Detail(3), &raw_detail(4, "entry-4").slim())
            .unwrap();
        assert_eq!(pipeline.resolve(2).await.unwrap().id, 3);
        assert_eq!(
            cache.load::<DetailRecord>(&CacheKey::Detail(3)).unwrap().id,
            3
        );
    }

    #[tokio::test]
    async fn test_mismatched_upstream_id_is_returned_but_not_cached() {
        let cache = memory_cache(1024 * 1024);
        let mut client = MockCatalogClient::new();
        client
            .expect_fetch_detail_payload()
            .times(2)
            .returning(|_| Ok(raw_detail(99, "stray")));

        let pipeline = pipeline_with(client, Arc::clone(&cache), 151).await;

        assert_eq!(pipeline.resolve(0).await.unwrap().id, 99);
        assert!(!cache.contains(&CacheKey::Detail(1)));

        // Warming does not mistake it for a cached entry either
        assert_eq!(
            pipeline.warm_position(0).await.unwrap(),
            WarmOutcome::Fetched { persisted: false }
        );
        assert!(!pipeline.is_cached(1));
    }

    #[tokio::test]
    async fn test_description_is_fetched_once_then_cached() {
        let cache = memory_cache(1024 * 1024);
        let mut client = MockCatalogClient::new();
        client
            .expect_fetch_description_payload()
            .withf(|id| *id == 7)
            .times(1)
            .returning(|_| Ok(raw_species(&[("en", "blue", "B"), ("en", "red", "A\nshell")])));

        let pipeline = pipeline_with(client, Arc::clone(&cache), 151).await;

        assert_eq!(pipeline.resolve_description(7).await.unwrap(), "A shell");
        assert!(cache.contains(&CacheKey::Description(7)));
        assert_eq!(pipeline.resolve_description(7).await.unwrap(), "A shell");
    }

    #[tokio::test]
    async fn test_description_without_english_entry() {
        let mut client = MockCatalogClient::new();
        client
            .expect_fetch_description_payload()
            .returning(|_| Ok(raw_species(&[])));

        let pipeline = pipeline_with(client, memory_cache(1024 * 1024), 151).await;

        assert_eq!(pipeline.resolve_description(1).await.unwrap(), NO_DESCRIPTION_TEXT);
    }

    #[tokio::test]
    async fn test_description_failure_does_not_fail_detail() {
        let cache = memory_cache(1024 * 1024);
        let mut client = MockCatalogClient::new();
        detail_by_locator(&mut client, 1);
        client
            .expect_fetch_description_payload()
            .returning(|_| Err(AppError::Network("HTTP 404".to_string())));

        let pipeline = pipeline_with(client, Arc::clone(&cache), 151).await;

        let resolution = pipeline.resolve_entry(4).await.unwrap();
        assert_eq!(resolution.id, 5);
        assert_eq!(resolution.detail.unwrap().id, 5);
        assert!(matches!(resolution.description, Err(AppError::Network(_))));
        assert!(!cache.contains(&CacheKey::Description(5)));
    }

    #[tokio::test]
    async fn test_detail_failure_does_not_fail_description() {
        let mut client = MockCatalogClient::new();
        client
            .expect_fetch_detail_payload()
            .returning(|_| Err(AppError::Network("HTTP 500".to_string())));
        client
            .expect_fetch_description_payload()
            .returning(|_| Ok(raw_species(&[("en", "red", "Seed.")])));

        let pipeline = pipeline_with(client, memory_cache(1024 * 1024), 151).await;

        let resolution = pipeline.resolve_entry(0).await.unwrap();
        assert!(resolution.detail.is_err());
        assert_eq!(resolution.description.unwrap(), "Seed.");
    }

    #[tokio::test]
    async fn test_warm_position_skips_cached_entries() {
        let cache = memory_cache(1024 * 1024);
        let mut client = MockCatalogClient::new();
        detail_by_locator(&mut client, 1);

        let pipeline = pipeline_with(client, Arc::clone(&cache), 151).await;

        assert_eq!(
            pipeline.warm_position(9).await.unwrap(),
            WarmOutcome::Fetched { persisted: true }
        );
        assert_eq!(
            pipeline.warm_position(9).await.unwrap(),
            WarmOutcome::AlreadyCached
        );
        assert!(pipeline.is_cached(10));
    }
}
