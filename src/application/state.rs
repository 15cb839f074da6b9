// src/application/state.rs

use log::{info, warn};
use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::config::PokedexConfig;
use crate::error::AppResult;
use crate::events::{EventBus, RosterLoadFailed, RosterLoaded};
use crate::integrations::CatalogClient;
use crate::repositories::{RecordCache, RecordStore};
use crate::services::{
    DetailPipeline, NavigationService, PrefetchReport, Prefetcher, RosterIndex, RosterSource,
};

/// Session state shared by every command.
/// All fields are Arc-wrapped; components are wired once in `build`.
pub struct AppState {
    pub config: PokedexConfig,
    pub event_bus: Arc<EventBus>,
    pub cache: Arc<RecordCache>,
    pub roster: Arc<RosterIndex>,
    pub pipeline: Arc<DetailPipeline>,
    pub prefetcher: Arc<Prefetcher>,
    pub navigation: Arc<NavigationService>,
}

impl AppState {
    pub fn build(
        config: PokedexConfig,
        client: Arc<dyn CatalogClient>,
        store: Arc<dyn RecordStore>,
    ) -> Self {
        let event_bus = Arc::new(EventBus::new());
        let cache = Arc::new(RecordCache::new(store));
        let roster = Arc::new(RosterIndex::new(
            Arc::clone(&client),
            Arc::clone(&cache),
            config.roster_limit,
        ));
        let pipeline = Arc::new(DetailPipeline::new(
            client,
            Arc::clone(&cache),
            Arc::clone(&roster),
        ));
        let prefetcher = Arc::new(Prefetcher::new(
            Arc::clone(&pipeline),
            Arc::clone(&event_bus),
        ));
        let navigation = Arc::new(NavigationService::new(
            Arc::clone(&roster),
            Arc::clone(&pipeline),
            Arc::clone(&prefetcher),
            Arc::clone(&event_bus),
        ));

        Self {
            config,
            event_bus,
            cache,
            roster,
            pipeline,
            prefetcher,
            navigation,
        }
    }

    /// Session start: loads the roster, announces it, and warms the
    /// bootstrap ids in the background.
    ///
    /// A roster failure is announced and returned; the session stays up
    /// without a list.
    pub async fn bootstrap(&self) -> AppResult<Option<JoinHandle<PrefetchReport>>> {
        let source = match self.roster.load().await {
            Ok(source) => source,
            Err(e) => {
                warn!("Roster unavailable: {}", e);
                self.event_bus.emit(RosterLoadFailed::new(e.to_string()));
                return Err(e);
            }
        };

        info!("Roster ready: {} entries ({:?})", self.roster.len(), source);
        self.event_bus.emit(RosterLoaded::new(
            self.roster.len(),
            source != RosterSource::Remote,
        ));

        if self.config.bootstrap_ids.is_empty() {
            return Ok(None);
        }
        Ok(Some(self.prefetcher.warm_ids(&self.config.bootstrap_ids)))
    }
}
