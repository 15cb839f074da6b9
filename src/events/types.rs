// src/events/types.rs
//
// All presentation-facing events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::DetailRecord;

/// Trait that all events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

macro_rules! domain_event {
    ($name:ident) => {
        impl DomainEvent for $name {
            fn event_id(&self) -> Uuid { self.event_id }
            fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
            fn event_type(&self) -> &'static str { stringify!($name) }
        }
    };
}

// ============================================================================
// ROSTER EVENTS
// ============================================================================

/// Emitted once the roster index is available for the session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterLoaded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub entry_count: usize,
    pub from_cache: bool,
}

impl RosterLoaded {
    pub fn new(entry_count: usize, from_cache: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            entry_count,
            from_cache,
        }
    }
}

domain_event!(RosterLoaded);

/// Emitted when the roster could not be loaded; terminal for the session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterLoadFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub message: String,
}

impl RosterLoadFailed {
    pub fn new(message: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            message,
        }
    }
}

domain_event!(RosterLoadFailed);

// ============================================================================
// SELECTION EVENTS
// ============================================================================

/// Emitted as soon as the cursor moves, before anything is resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntrySelected {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub position: usize,
    pub id: u32,
}

impl EntrySelected {
    pub fn new(position: usize, id: u32) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            position,
            id,
        }
    }
}

domain_event!(EntrySelected);

/// Emitted when the selected entry's record is ready to render
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailResolved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub position: usize,
    pub record: DetailRecord,
}

impl DetailResolved {
    pub fn new(position: usize, record: DetailRecord) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            position,
            record,
        }
    }
}

domain_event!(DetailResolved);

/// Emitted when the selected entry's record could not be resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub position: usize,
    pub id: u32,
    pub message: String,
}

impl DetailFailed {
    pub fn new(position: usize, id: u32, message: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            position,
            id,
            message,
        }
    }
}

domain_event!(DetailFailed);

/// Emitted with the description text of the selected entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptionResolved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub position: usize,
    pub text: String,
}

impl DescriptionResolved {
    pub fn new(position: usize, text: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            position,
            text,
        }
    }
}

domain_event!(DescriptionResolved);

/// Emitted when the description of the selected entry could not be fetched
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptionFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub position: usize,
    pub message: String,
}

impl DescriptionFailed {
    pub fn new(position: usize, message: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            position,
            message,
        }
    }
}

domain_event!(DescriptionFailed);

// ============================================================================
// PREFETCH EVENTS
// ============================================================================

/// Emitted when a warm batch finishes, whatever its individual outcomes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefetchCompleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub warmed: Vec<u32>,
    pub already_cached: Vec<u32>,
    pub failed: Vec<u32>,
}

impl PrefetchCompleted {
    pub fn new(warmed: Vec<u32>, already_cached: Vec<u32>, failed: Vec<u32>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            warmed,
            already_cached,
            failed,
        }
    }
}

domain_event!(PrefetchCompleted);
