// src/services/navigation_service.rs
//
// Navigation Cursor - selection and relative moves over the roster ring.
//
// A selection opens a new generation. Results are published on the event
// bus only while their generation is still current, so a slow response for
// an abandoned position never overwrites a newer one. The cache write of an
// abandoned resolution still lands.

use log::{debug, warn};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::{id_for_position, NavigationState, NavigationStep};
use crate::events::{
    DescriptionFailed, DescriptionResolved, DetailFailed, DetailResolved, EntrySelected, EventBus,
};
use crate::services::detail_pipeline::{DetailPipeline, EntryResolution};
use crate::services::prefetcher::Prefetcher;
use crate::services::roster_service::RosterIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Invalid position or no-op move; nothing changed
    Ignored,
    /// Detail (and description) published
    Rendered { position: usize },
    /// Detail could not be resolved; failure published
    DetailFailed { position: usize },
    /// A newer selection arrived before this one resolved
    Superseded { position: usize },
}

pub struct NavigationService {
    roster: Arc<RosterIndex>,
    pipeline: Arc<DetailPipeline>,
    prefetcher: Arc<Prefetcher>,
    event_bus: Arc<EventBus>,
    state: Mutex<NavigationState>,
}

impl NavigationService {
    pub fn new(
        roster: Arc<RosterIndex>,
        pipeline: Arc<DetailPipeline>,
        prefetcher: Arc<Prefetcher>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            roster,
            pipeline,
            prefetcher,
            event_bus,
            state: Mutex::new(NavigationState::new()),
        }
    }

    /// Currently selected position, `None` before the first selection
    pub fn current(&self) -> Option<usize> {
        self.lock_state().current()
    }

    /// Selects a position, resolves it and warms its neighbors.
    ///
    /// Out-of-range positions are logged and ignored.
    pub async fn select(&self, position: i64) -> SelectOutcome {
        let position = match self.roster.check_position(position) {
            Ok(position) => position,
            Err(e) => {
                warn!("Ignoring selection: {}", e);
                return SelectOutcome::Ignored;
            }
        };

        let ticket = self.lock_state().select(position);
        let id = id_for_position(position);
        self.event_bus.emit(EntrySelected::new(position, id));

        // Detached: the handle is dropped, the foreground never waits on it
        let _ = self.prefetcher.warm(position);

        let resolution = match self.pipeline.resolve_entry(position).await {
            Ok(resolution) => resolution,
            Err(e) => {
                warn!("Could not resolve position {}: {}", position, e);
                return SelectOutcome::Ignored;
            }
        };

        if !self.lock_state().is_current(&ticket) {
            debug!("Dropping stale result for id {}", id);
            return SelectOutcome::Superseded { position };
        }

        self.publish(resolution)
    }

    /// Moves the cursor by `delta` on the roster ring
    pub async fn move_by(&self, delta: i64) -> SelectOutcome {
        let target = self.lock_state().target_for(delta, self.roster.len());
        match target {
            Some(target) => self.select(target as i64).await,
            None => SelectOutcome::Ignored,
        }
    }

    pub async fn step(&self, step: NavigationStep) -> SelectOutcome {
        self.move_by(step.delta()).await
    }

    fn publish(&self, resolution: EntryResolution) -> SelectOutcome {
        let EntryResolution {
            position,
            id,
            detail,
            description,
        } = resolution;

        let outcome = match detail {
            Ok(record) => {
                self.event_bus.emit(DetailResolved::new(position, record));
                SelectOutcome::Rendered { position }
            }
            Err(e) => {
                warn!("Could not load details for id {}: {}", id, e);
                self.event_bus
                    .emit(DetailFailed::new(position, id, e.to_string()));
                SelectOutcome::DetailFailed { position }
            }
        };

        match description {
            Ok(text) => self.event_bus.emit(DescriptionResolved::new(position, text)),
            Err(e) => {
                warn!("Could not load description for id {}: {}", id, e);
                self.event_bus
                    .emit(DescriptionFailed::new(position, e.to_string()));
            }
        }

        outcome
    }

    fn lock_state(&self) -> MutexGuard<'_, NavigationState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
