// src/repositories/mod.rs
//
// Repositories Module - Persistence Layer

pub mod cache_key;
pub mod record_cache;
pub mod record_store;

pub use cache_key::CacheKey;
pub use record_cache::RecordCache;
pub use record_store::{RecordStore, SqliteRecordStore};

#[cfg(test)]
pub use record_store::MockRecordStore;
