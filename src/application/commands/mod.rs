// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between user input and services
// - Commands return DTOs, or a serialized ErrorResponse on failure
// - Commands NEVER contain business logic

pub mod cache_commands;
pub mod navigation_commands;
pub mod roster_commands;

pub use cache_commands::*;
pub use navigation_commands::*;
pub use roster_commands::*;
