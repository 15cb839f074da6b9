// src/error/types.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Transport failure, non-success status or unreadable response body
    #[error("Network error: {0}")]
    Network(String),

    /// Persistent store rejected a write
    #[error("Cache quota exceeded: {needed} bytes needed, capacity is {capacity} bytes")]
    QuotaExceeded { needed: u64, capacity: u64 },

    #[error("Position {position} is out of bounds for a roster of {length} entries")]
    OutOfBounds { position: i64, length: usize },

    /// Malformed cached bytes
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Roster has not been loaded")]
    RosterNotLoaded,

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

impl AppError {
    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, AppError::QuotaExceeded { .. })
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err.to_string())
    }
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::Pool(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_detection() {
        let quota = AppError::QuotaExceeded {
            needed: 10,
            capacity: 5,
        };
        assert!(quota.is_quota_exceeded());
        assert!(!AppError::Network("offline".to_string()).is_quota_exceeded());
    }

    #[test]
    fn test_out_of_bounds_message() {
        let err = AppError::OutOfBounds {
            position: 151,
            length: 151,
        };
        assert_eq!(
            err.to_string(),
            "Position 151 is out of bounds for a roster of 151 entries"
        );
    }
}
