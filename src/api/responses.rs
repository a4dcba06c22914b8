use crate::capacity::{NodeCapacity, RenderConfig};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Generic API response wrapper.
#[derive(Debug, Serialize)]
pub(crate) struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub(crate) const fn ok(data: T) -> Self {
        Self { success: true, data: Some(data), error: None }
    }

    pub(crate) fn err(msg: impl Into<String>) -> Self {
        Self { success: false, data: None, error: Some(msg.into()) }
    }
}

/// Query string for GET /api/capacity/chart.
#[derive(Debug, Deserialize)]
pub(crate) struct ChartQuery {
    pub viewport_height: Option<u32>,
}

/// Request body for POST /api/settings.
#[derive(Debug, Deserialize)]
pub(crate) struct SettingsUpdateRequest {
    pub default_viewport_height: Option<u32>,
    pub tall_viewport_min: Option<u32>,
    pub tall_chart_height: Option<u32>,
    pub short_chart_height: Option<u32>,
    pub scroll_min_nodes: Option<usize>,
    pub category_width: Option<u32>,
    pub max_palette_colors: Option<usize>,
    pub max_samples: Option<usize>,
}

/// Daemon and snapshot summary returned by the status endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct StatusResponse {
    pub version: String,
    pub revision: u64,
    pub sample_count: usize,
    pub received_at: Option<DateTime<Utc>>,
}

/// Render configuration tagged with the snapshot it was computed from.
#[derive(Debug, Serialize)]
pub(crate) struct ChartResponse {
    pub revision: u64,
    #[serde(flatten)]
    pub chart: RenderConfig,
}

#[derive(Debug, Serialize)]
pub(crate) struct SummaryResponse {
    pub revision: u64,
    pub nodes: Vec<NodeCapacity>,
}

/// Current snapshot contents.
#[derive(Debug, Serialize)]
pub(crate) struct SamplesResponse<'a> {
    pub revision: u64,
    pub received_at: Option<DateTime<Utc>>,
    pub samples: &'a [crate::capacity::CapacitySample],
}
