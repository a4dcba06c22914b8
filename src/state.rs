use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

use crate::capacity::{
    filter_samples, index_samples, validate_samples, CapacitySample, ChartCache, ChartData,
    ColorPaletteProvider, HuePalette, SampleError,
};
use crate::config::AppConfig;
use crate::events::{Event, EventHub};

/// Shared application state passed to all API handlers via axum's State extractor.
pub struct AppState {
    pub config: AppConfig,
    pub event_hub: EventHub,
    palette: Box<dyn ColorPaletteProvider>,
    chart_cache: ChartCache,
    snapshot: tokio::sync::RwLock<Snapshot>,
}

/// The latest capacity samples pushed by the collector.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Bumped on every accepted push; 0 before the first one.
    pub revision: u64,
    pub samples: Arc<Vec<CapacitySample>>,
    pub received_at: Option<DateTime<Utc>>,
}

impl Snapshot {
    pub fn info(&self) -> SnapshotInfo {
        let (node_count, pool_count) = key_counts(&self.samples);
        SnapshotInfo {
            revision: self.revision,
            sample_count: self.samples.len(),
            node_count,
            pool_count,
        }
    }
}

/// What an accepted push looked like after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SnapshotInfo {
    pub revision: u64,
    pub sample_count: usize,
    pub node_count: usize,
    pub pool_count: usize,
}

impl AppState {
    pub fn new(config: AppConfig, event_hub: EventHub) -> Self {
        let palette = Box::new(HuePalette::new(config.max_palette_colors));
        Self::with_palette(config, event_hub, palette)
    }

    pub fn with_palette(
        config: AppConfig,
        event_hub: EventHub,
        palette: Box<dyn ColorPaletteProvider>,
    ) -> Self {
        Self {
            config,
            event_hub,
            palette,
            chart_cache: ChartCache::new(),
            snapshot: tokio::sync::RwLock::new(Snapshot::default()),
        }
    }

    pub async fn snapshot(&self) -> Snapshot {
        self.snapshot.read().await.clone()
    }

    /// Validate and install a new snapshot. A rejected push leaves the
    /// previous snapshot untouched.
    pub async fn replace_snapshot(
        &self,
        samples: Vec<CapacitySample>,
    ) -> Result<SnapshotInfo, SampleError> {
        if let Err(e) = validate_samples(&samples, self.config.max_samples) {
            warn!("Rejected capacity snapshot: {e}");
            let _ = self.event_hub.publish(Event::SnapshotRejected { message: e.to_string() });
            return Err(e);
        }

        let sample_count = samples.len();
        let (node_count, pool_count) = key_counts(&samples);

        let revision = {
            let mut snapshot = self.snapshot.write().await;
            snapshot.revision += 1;
            snapshot.samples = Arc::new(samples);
            snapshot.received_at = Some(Utc::now());
            snapshot.revision
        };

        info!(
            "Capacity snapshot r{}: {} samples, {} nodes, {} pools",
            revision, sample_count, node_count, pool_count
        );

        let info = SnapshotInfo { revision, sample_count, node_count, pool_count };
        let _ = self.event_hub.publish(Event::SnapshotUpdated {
            revision,
            sample_count,
            node_count,
            pool_count,
        });
        Ok(info)
    }

    /// Chart data for a snapshot, served from the memo when unchanged.
    pub fn chart_for(&self, snapshot: &Snapshot) -> Arc<ChartData> {
        self.chart_cache.get_or_compute(&snapshot.samples, self.palette.as_ref())
    }
}

/// Number of chart categories (nodes) and distinct pools a snapshot yields.
fn key_counts(samples: &[CapacitySample]) -> (usize, usize) {
    let kept = filter_samples(samples);
    let index = index_samples(&kept);
    (index.node_keys.len(), index.pool_keys.len())
}
