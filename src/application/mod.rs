// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Boundary between the user-facing host and the services
// - Translates domain records into view models
// - Decides which failures become placeholders

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod state;

pub use commands::*;
pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
pub use state::AppState;
