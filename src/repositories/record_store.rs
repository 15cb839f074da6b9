// src/repositories/record_store.rs

use chrono::Utc;
use rusqlite::{params, OptionalExtension};
use std::sync::Arc;

use crate::db::{get_connection, get_database_stats, ConnectionPool, DatabaseStats};
use crate::error::{AppError, AppResult};
use crate::repositories::cache_key::CacheKey;

/// String-keyed, string-valued persistent store with a bounded capacity.
/// No expiry, no eviction.
#[cfg_attr(test, mockall::automock)]
pub trait RecordStore: Send + Sync {
    fn get(&self, key: &CacheKey) -> AppResult<Option<String>>;

    /// Fails with `AppError::QuotaExceeded` when the value does not fit
    fn set(&self, key: &CacheKey, value: &str) -> AppResult<()>;

    fn contains(&self, key: &CacheKey) -> AppResult<bool>;

    /// Entry count and total value bytes currently held
    fn usage(&self) -> AppResult<DatabaseStats>;
}

pub struct SqliteRecordStore {
    pool: Arc<ConnectionPool>,
    capacity_bytes: u64,
}

impl SqliteRecordStore {
    pub fn new(pool: Arc<ConnectionPool>, capacity_bytes: u64) -> Self {
        Self {
            pool,
            capacity_bytes,
        }
    }
}

impl RecordStore for SqliteRecordStore {
    fn get(&self, key: &CacheKey) -> AppResult<Option<String>> {
        let conn = get_connection(&self.pool)?;
        let value = conn
            .query_row(
                "SELECT value FROM cache_entries WHERE key = ?1",
                params![key.to_string()],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &CacheKey, value: &str) -> AppResult<()> {
        let mut conn = get_connection(&self.pool)?;
        let tx = conn.transaction()?;

        // A replaced value no longer counts against the quota
        let others: i64 = tx.query_row(
            "SELECT COALESCE(SUM(byte_size), 0) FROM cache_entries WHERE key != ?1",
            params![key.to_string()],
            |row| row.get(0),
        )?;
        let needed = others as u64 + value.len() as u64;
        if needed > self.capacity_bytes {
            return Err(AppError::QuotaExceeded {
                needed,
                capacity: self.capacity_bytes,
            });
        }

        tx.execute(
            "INSERT OR REPLACE INTO cache_entries (key, value, byte_size, stored_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                key.to_string(),
                value,
                value.len() as i64,
                Utc::now().to_rfc3339()
            ],
        )?;
        tx.commit()?;
        Ok(())
    }

    fn contains(&self, key: &CacheKey) -> AppResult<bool> {
        let conn = get_connection(&self.pool)?;
        let exists: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM cache_entries WHERE key = ?1)",
            params![key.to_string()],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    fn usage(&self) -> AppResult<DatabaseStats> {
        let conn = get_connection(&self.pool)?;
        get_database_stats(&conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_connection_pool, create_memory_pool};

    fn store(capacity: u64) -> SqliteRecordStore {
        SqliteRecordStore::new(Arc::new(create_memory_pool().unwrap()), capacity)
    }

    #[test]
    fn test_get_missing_key() {
        let store = store(1024);
        assert_eq!(store.get(&CacheKey::Detail(1)).unwrap(), None);
        assert!(!store.contains(&CacheKey::Detail(1)).unwrap());
    }

    #[test]
    fn test_set_then_get() {
        let store = store(1024);
        store.set(&CacheKey::Detail(1), "{\"id\":1}").unwrap();

        assert_eq!(
            store.get(&CacheKey::Detail(1)).unwrap().as_deref(),
            Some("{\"id\":1}")
        );
        assert!(store.contains(&CacheKey::Detail(1)).unwrap());
        assert!(!store.contains(&CacheKey::Description(1)).unwrap());
        assert_eq!(store.usage().unwrap().value_bytes, 8);
        assert_eq!(store.usage().unwrap().entry_count, 1);
    }

    #[test]
    fn test_quota_exceeded_leaves_store_untouched() {
        let store = store(10);
        store.set(&CacheKey::Detail(1), "12345678").unwrap();

        let err = store.set(&CacheKey::Detail(2), "123").unwrap_err();
        assert!(matches!(
            err,
            AppError::QuotaExceeded {
                needed: 11,
                capacity: 10
            }
        ));
        assert!(!store.contains(&CacheKey::Detail(2)).unwrap());
        assert_eq!(store.usage().unwrap().value_bytes, 8);
    }

    #[test]
    fn test_replacing_key_does_not_double_count() {
        let store = store(10);
        store.set(&CacheKey::Roster, "123456789").unwrap();
        store.set(&CacheKey::Roster, "987654321").unwrap();

        assert_eq!(store.usage().unwrap().value_bytes, 9);
        assert_eq!(
            store.get(&CacheKey::Roster).unwrap().as_deref(),
            Some("987654321")
        );
    }

    #[test]
    fn test_entries_survive_a_new_store() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("pokedex.db");

        {
            let first = SqliteRecordStore::new(
                Arc::new(create_connection_pool(&db_path).unwrap()),
                1024,
            );
            first.set(&CacheKey::Description(4), "[]").unwrap();
        }

        let second = SqliteRecordStore::new(
            Arc::new(create_connection_pool(&db_path).unwrap()),
            1024,
        );
        assert_eq!(
            second.get(&CacheKey::Description(4)).unwrap().as_deref(),
            Some("[]")
        );
    }
}
