// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod detail_pipeline;
pub mod navigation_service;
pub mod prefetcher;
pub mod roster_service;


pub use detail_pipeline::{DetailPipeline, EntryResolution, WarmOutcome};
pub use navigation_service::{NavigationService, SelectOutcome};
pub use prefetcher::{PrefetchReport, Prefetcher};
pub use roster_service::{RosterIndex, RosterSource};
