// src/application/commands/cache_commands.rs

use serde::{Deserialize, Serialize};

use crate::application::error_handling::ToErrorResponse;
use crate::application::state::AppState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheUsageDto {
    pub entry_count: u64,
    pub used_bytes: u64,
    pub capacity_bytes: u64,
}

/// Entries and bytes held by the local record cache against its quota
pub async fn get_cache_usage(state: &AppState) -> Result<CacheUsageDto, String> {
    let usage = state.cache.usage().to_error_response()?;

    Ok(CacheUsageDto {
        entry_count: usage.entry_count.max(0) as u64,
        used_bytes: usage.value_bytes.max(0) as u64,
        capacity_bytes: state.config.cache_capacity_bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::config::PokedexConfig;
    use crate::db::create_memory_pool;
    use crate::integrations::MockCatalogClient;
    use crate::repositories::{CacheKey, SqliteRecordStore};

    #[tokio::test]
    async fn test_cache_usage_counts_entries() {
        let pool = Arc::new(create_memory_pool().unwrap());
        let store = Arc::new(SqliteRecordStore::new(pool, 1024));
        let state = AppState::build(PokedexConfig::default(), Arc::new(MockCatalogClient::new()), store);

        let empty = get_cache_usage(&state).await.unwrap();
        assert_eq!(empty.entry_count, 0);
        assert_eq!(empty.used_bytes, 0);

        state.cache.store(&CacheKey::Description(1), &"A seed.").unwrap();
        state.cache.store(&CacheKey::Description(2), &"A bud.").unwrap();

        let usage = get_cache_usage(&state).await.unwrap();
        assert_eq!(usage.entry_count, 2);
        // JSON strings carry their quotes
        assert_eq!(usage.used_bytes, 9 + 8);
        assert_eq!(usage.capacity_bytes, PokedexConfig::default().cache_capacity_bytes);
    }
}
