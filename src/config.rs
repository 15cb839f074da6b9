// src/config.rs
//
// Runtime configuration.
//
// Defaults mirror the public PokeAPI and a browser-sized storage quota.
// Every field can be overridden through `POKEDEX_*` environment variables.

use log::warn;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// First-generation roster size
pub const DEFAULT_ROSTER_LIMIT: u32 = 151;

/// Entries warmed as soon as the roster is available
pub const DEFAULT_BOOTSTRAP_IDS: [u32; 2] = [1, 10];

/// 5 MiB, the usual per-origin local storage quota
pub const DEFAULT_CACHE_CAPACITY_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokedexConfig {
    pub api_base_url: String,
    pub roster_limit: u32,
    pub bootstrap_ids: Vec<u32>,
    pub cache_capacity_bytes: u64,
    /// `None` places the database in the platform cache directory
    pub database_path: Option<PathBuf>,
}

impl Default for PokedexConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            roster_limit: DEFAULT_ROSTER_LIMIT,
            bootstrap_ids: DEFAULT_BOOTSTRAP_IDS.to_vec(),
            cache_capacity_bytes: DEFAULT_CACHE_CAPACITY_BYTES,
            database_path: None,
        }
    }
}

impl PokedexConfig {
    /// Defaults overridden by the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("POKEDEX_API_BASE_URL") {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(limit) = parse_var(&lookup, "POKEDEX_ROSTER_LIMIT") {
            config.roster_limit = limit;
        }
        if let Some(capacity) = parse_var(&lookup, "POKEDEX_CACHE_CAPACITY_BYTES") {
            config.cache_capacity_bytes = capacity;
        }
        if let Some(path) = lookup("POKEDEX_DB_PATH") {
            config.database_path = Some(PathBuf::from(path));
        }

        config
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring invalid value {:?} for {}", raw, key);
            None
        }
    }
}
