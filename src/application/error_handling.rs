// src/application/error_handling.rs
//
// Error handling for commands
//
// ARCHITECTURE:
// - Maps internal errors to a category and a user-facing message
// - Owns the placeholder texts shown in place of unavailable content
// - Never exposes internal implementation details

use log::error;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub const ROSTER_FAILED_PLACEHOLDER: &str = "Failed to load list.";
pub const DETAIL_FAILED_PLACEHOLDER: &str = "Load failed!";
pub const STATS_FAILED_PLACEHOLDER: &str = "Stats unavailable";
pub const DESCRIPTION_FAILED_PLACEHOLDER: &str = "Description unavailable.";
pub const LOADING_PLACEHOLDER: &str = "Loading...";

/// Standard error response for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Position outside the roster, or roster missing
    NotFound,

    /// Invalid user input
    Validation,

    /// Local cache unavailable or full
    Storage,

    /// Upstream catalog unreachable or malformed
    ExternalService,

    /// Other/unknown error
    Internal,
}

impl ErrorResponse {
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::Network(message) => Self::failure(
                ErrorType::ExternalService,
                "Catalog request failed",
                Some(message),
            ),

            AppError::Decode(message) => Self::failure(
                ErrorType::ExternalService,
                "Catalog response could not be read",
                Some(message),
            ),

            AppError::OutOfBounds { position, length } => Self::failure(
                ErrorType::NotFound,
                "Entry not found",
                Some(format!("position {} outside 0..{}", position, length)),
            ),

            AppError::RosterNotLoaded => {
                Self::failure(ErrorType::NotFound, ROSTER_FAILED_PLACEHOLDER, None)
            }

            AppError::QuotaExceeded { needed, capacity } => Self::failure(
                ErrorType::Storage,
                "Local cache is full",
                Some(format!("{} bytes needed, capacity {}", needed, capacity)),
            ),

            AppError::Database(db_error) => {
                error!("Database error: {:?}", db_error);
                Self::failure(
                    ErrorType::Storage,
                    "Local cache operation failed",
                    Some("Check logs for details".to_string()),
                )
            }

            AppError::Pool(pool_error) => {
                error!("Connection pool error: {}", pool_error);
                Self::failure(ErrorType::Storage, "Local cache unavailable", None)
            }

            AppError::Serialization(serde_error) => {
                error!("Serialization error: {:?}", serde_error);
                Self::failure(ErrorType::Internal, "Data serialization failed", None)
            }

            AppError::Io(io_error) => Self::failure(
                ErrorType::Storage,
                "File system operation failed",
                Some(io_error.to_string()),
            ),

            AppError::Other(message) => {
                error!("Other error: {}", message);
                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message,
                    details: None,
                }
            }
        }
    }

    pub fn validation(message: String) -> Self {
        Self {
            success: false,
            error_type: ErrorType::Validation,
            message,
            details: None,
        }
    }

    fn failure(error_type: ErrorType, message: &str, details: Option<String>) -> Self {
        Self {
            success: false,
            error_type,
            message: message.to_string(),
            details,
        }
    }
}

/// Serialized validation `ErrorResponse` for rejected user input
pub fn validation_error(message: String) -> String {
    serde_json::to_string(&ErrorResponse::validation(message))
        .unwrap_or_else(|_| "Internal error".to_string())
}

/// Helper trait to convert Results into serialized ErrorResponses
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, String>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| {
            let error_response = ErrorResponse::from_app_error(e);
            serde_json::to_string(&error_response).unwrap_or_else(|_| "Internal error".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_is_external() {
        let error = ErrorResponse::from_app_error(AppError::Network("HTTP 500".to_string()));
        assert_eq!(error.error_type, ErrorType::ExternalService);
        assert_eq!(error.details.as_deref(), Some("HTTP 500"));
        assert!(!error.success);
    }

    #[test]
    fn test_roster_missing_uses_placeholder() {
        let error = ErrorResponse::from_app_error(AppError::RosterNotLoaded);
        assert_eq!(error.error_type, ErrorType::NotFound);
        assert_eq!(error.message, ROSTER_FAILED_PLACEHOLDER);
    }

    #[test]
    fn test_quota_is_storage() {
        let error = ErrorResponse::from_app_error(AppError::QuotaExceeded {
            needed: 10,
            capacity: 5,
        });
        assert_eq!(error.error_type, ErrorType::Storage);
    }

    #[test]
    fn test_validation_error() {
        let error = ErrorResponse::validation("Invalid input".to_string());
        assert_eq!(error.error_type, ErrorType::Validation);
        assert_eq!(error.message, "Invalid input");
    }

    #[test]
    fn test_serialization() {
        let result: Result<(), AppError> = Err(AppError::OutOfBounds {
            position: 200,
            length: 151,
        });
        let json = result.to_error_response().unwrap_err();
        assert!(json.contains("not_found"));
        assert!(json.contains("Entry not found"));
    }
}
