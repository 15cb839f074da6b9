// src/events/mod.rs
//
// Event System - Public API
//
// CRITICAL: EventHandler is INTERNAL and must NOT be exported

pub mod bus;
pub mod types;

pub use types::DomainEvent;

pub use types::{
    // Selection
    DescriptionFailed,
    DescriptionResolved,
    DetailFailed,
    DetailResolved,
    EntrySelected,
    // Prefetch
    PrefetchCompleted,
    // Roster
    RosterLoadFailed,
    RosterLoaded,
};

pub use bus::{EventBus, EventLogEntry};
