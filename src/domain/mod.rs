// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod description;
pub mod detail;
pub mod navigation;
pub mod roster;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Roster
pub use roster::{id_for_position, position_for_id, RosterEntry};

// Detail
pub use detail::{validate_detail_record, DetailRecord, StatEntry, StatName};

// Description
pub use description::{
    clean_flavor_text, DescriptionRecord, FlavorEntry, NO_DESCRIPTION_TEXT,
};

// Navigation
pub use navigation::{
    neighbor_positions, wrap_position, NavigationState, NavigationStep, SelectionTicket,
};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
