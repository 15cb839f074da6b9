// src/repositories/cache_key.rs

use std::fmt;

const ROSTER_KEY: &str = "roster";
const DETAIL_PREFIX: &str = "detail:";
const DESCRIPTION_PREFIX: &str = "description:";

/// Namespaced key of a cache entry: `roster`, `detail:{id}` or `description:{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Roster,
    Detail(u32),
    Description(u32),
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheKey::Roster => f.write_str(ROSTER_KEY),
            CacheKey::Detail(id) => write!(f, "{}{}", DETAIL_PREFIX, id),
            CacheKey::Description(id) => write!(f, "{}{}", DESCRIPTION_PREFIX, id),
        }
    }
}
