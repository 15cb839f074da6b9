// src/services/prefetcher.rs
//
// Prefetcher - warms the detail cache ahead of navigation.
//
// CRITICAL RULES:
// - Runs as a detached task; the foreground never awaits it
// - Never renders, never surfaces an error
// - Races with the foreground pipeline are tolerated: both sides write the
//   same bytes for a given id

use log::{debug, warn};
use std::sync::Arc;
use tokio::task::JoinHandle;

use crate::domain::{id_for_position, neighbor_positions, position_for_id};
use crate::events::{EventBus, PrefetchCompleted};
use crate::services::detail_pipeline::{DetailPipeline, WarmOutcome};

/// Outcome of one warm batch, by catalog id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefetchReport {
    pub warmed: Vec<u32>,
    pub already_cached: Vec<u32>,
    pub failed: Vec<u32>,
}

impl PrefetchReport {
    /// Number of ids the batch looked at
    pub fn attempted(&self) -> usize {
        self.warmed.len() + self.already_cached.len() + self.failed.len()
    }
}

pub struct Prefetcher {
    pipeline: Arc<DetailPipeline>,
    event_bus: Arc<EventBus>,
}

impl Prefetcher {
    pub fn new(pipeline: Arc<DetailPipeline>, event_bus: Arc<EventBus>) -> Self {
        Self {
            pipeline,
            event_bus,
        }
    }

    /// Neighbor positions warmed around `position`
    pub fn targets(&self, position: usize) -> Vec<usize> {
        neighbor_positions(position, self.pipeline.roster().len())
    }

    /// Warms the ±1/±10 neighborhood of `position` in the background.
    ///
    /// Dropping the handle detaches the task.
    pub fn warm(&self, position: usize) -> JoinHandle<PrefetchReport> {
        let targets = self.targets(position);
        debug!(
            "Prefetching ids {:?} around {}",
            targets.iter().map(|p| id_for_position(*p)).collect::<Vec<_>>(),
            id_for_position(position)
        );
        self.spawn_batch(targets)
    }

    /// Warms explicit catalog ids in the background (bootstrap hint)
    pub fn warm_ids(&self, ids: &[u32]) -> JoinHandle<PrefetchReport> {
        let positions = ids.iter().filter_map(|id| position_for_id(*id)).collect();
        self.spawn_batch(positions)
    }

    fn spawn_batch(&self, positions: Vec<usize>) -> JoinHandle<PrefetchReport> {
        let pipeline = Arc::clone(&self.pipeline);
        let event_bus = Arc::clone(&self.event_bus);

        tokio::spawn(async move {
            let report = warm_positions(&pipeline, positions).await;
            debug!(
                "Prefetch batch done: {} ids, {} fetched",
                report.attempted(),
                report.warmed.len()
            );
            event_bus.emit(PrefetchCompleted::new(
                report.warmed.clone(),
                report.already_cached.clone(),
                report.failed.clone(),
            ));
            report
        })
    }
}

async fn warm_positions(pipeline: &DetailPipeline, positions: Vec<usize>) -> PrefetchReport {
    let mut report = PrefetchReport::default();

    for position in positions {
        let id = id_for_position(position);
        match pipeline.warm_position(position).await {
            Ok(WarmOutcome::AlreadyCached) => report.already_cached.push(id),
            Ok(WarmOutcome::Fetched { persisted }) => {
                if !persisted {
                    debug!("Prefetched {} but could not cache it", id);
                }
                report.warmed.push(id);
            }
            Err(e) => {
                warn!("Prefetch of {} failed: {}", id, e);
                report.failed.push(id);
            }
        }
    }

    report
}
