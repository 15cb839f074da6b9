// src/lib.rs
// Pokedex - cache-aware first-generation catalog viewer
//
// Architecture:
// - Domain-centric: records, navigation ring and description selection live in domain/
// - Cache first: every detail passes through the local record cache
// - Event-driven: the navigation layer publishes what the screen should show
// - Application Layer: view models, commands and placeholders for the host

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod integrations;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    clean_flavor_text,
    id_for_position,
    neighbor_positions,
    position_for_id,
    validate_detail_record,
    wrap_position,
    // Description
    DescriptionRecord,
    // Detail
    DetailRecord,
    FlavorEntry,
    // Navigation
    NavigationState,
    NavigationStep,
    // Roster
    RosterEntry,
    SelectionTicket,
    StatEntry,
    StatName,
};

// ============================================================================
// PUBLIC API - Configuration & Errors
// ============================================================================

pub use config::PokedexConfig;
pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    DescriptionFailed,
    DescriptionResolved,
    DetailFailed,
    DetailResolved,
    DomainEvent,
    EntrySelected,
    EventBus,
    EventLogEntry,
    PrefetchCompleted,
    RosterLoadFailed,
    RosterLoaded,
};

// ============================================================================
// PUBLIC API - Database & Repositories
// ============================================================================

pub use db::{create_connection_pool, get_database_path, initialize_database, ConnectionPool};
pub use repositories::{CacheKey, RecordCache, RecordStore, SqliteRecordStore};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    DetailPipeline,
    EntryResolution,
    NavigationService,
    PrefetchReport,
    Prefetcher,
    RosterIndex,
    RosterSource,
    SelectOutcome,
    WarmOutcome,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;

pub use application::commands;
pub use application::dto;

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{CatalogClient, PokeApiClient};
