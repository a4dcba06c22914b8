use serde::{Deserialize, Serialize};

const DEFAULT_TALL_VIEWPORT_MIN: u32 = 900;
const DEFAULT_TALL_CHART_HEIGHT: u32 = 500;
const DEFAULT_SHORT_CHART_HEIGHT: u32 = 300;
const DEFAULT_SCROLL_MIN_NODES: usize = 5;
const DEFAULT_CATEGORY_WIDTH: u32 = 400;

/// Rendered chart dimensions. `width` is only set for scrolling charts;
/// otherwise the chart fills its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSize {
    pub height: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    pub scrollable: bool,
}

/// Thresholds that map viewport height and category count to a chart size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizingPolicy {
    /// Viewports strictly taller than this get the tall chart.
    pub tall_viewport_min: u32,
    pub tall_chart_height: u32,
    pub short_chart_height: u32,
    /// Charts with at least this many node categories scroll horizontally.
    pub scroll_min_nodes: usize,
    /// Pixel budget per category when scrolling.
    pub category_width: u32,
}

impl Default for SizingPolicy {
    fn default() -> Self {
        Self {
            tall_viewport_min: DEFAULT_TALL_VIEWPORT_MIN,
            tall_chart_height: DEFAULT_TALL_CHART_HEIGHT,
            short_chart_height: DEFAULT_SHORT_CHART_HEIGHT,
            scroll_min_nodes: DEFAULT_SCROLL_MIN_NODES,
            category_width: DEFAULT_CATEGORY_WIDTH,
        }
    }
}

impl SizingPolicy {
    pub fn size(&self, viewport_height: u32, node_count: usize) -> ChartSize {
        let height = if viewport_height > self.tall_viewport_min {
            self.tall_chart_height
        } else {
            self.short_chart_height
        };

        let scrollable = node_count >= self.scroll_min_nodes;
        let width = scrollable.then(|| {
            u32::try_from(node_count).unwrap_or(u32::MAX).saturating_mul(self.category_width)
        });

        ChartSize { height, width, scrollable }
    }
}

/// Size a chart with the stock thresholds.
pub fn size_policy(viewport_height: u32, node_count: usize) -> ChartSize {
    SizingPolicy::default().size(viewport_height, node_count)
}
