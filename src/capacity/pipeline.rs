use super::aggregate::aggregate;
use super::filter::filter_samples;
use super::format::format_bytes;
use super::index::index_samples;
use super::options::{stack_peak, y_axis_ticks, AxisTick, ChartOptions};
use super::palette::ColorPaletteProvider;
use super::series::build_series;
use super::sizing::{ChartSize, SizingPolicy};
use super::types::{CapacitySample, ChartData, Series};
use serde::Serialize;
use tracing::debug;

/// Run filter → index → aggregate → series over a sample snapshot.
///
/// Pure: the same samples and palette always produce the same chart.
pub fn compute_chart_data(
    samples: &[CapacitySample],
    palette: &dyn ColorPaletteProvider,
) -> ChartData {
    let kept = filter_samples(samples);
    let index = index_samples(&kept);
    let aggregates = aggregate(&index);
    let series = build_series(&index, &aggregates, palette);

    debug!(
        "Chart computed: {} samples ({} kept), {} nodes, {} pools, {} series",
        samples.len(),
        kept.len(),
        index.node_keys.len(),
        index.pool_keys.len(),
        series.len()
    );

    ChartData { series, categories: index.node_keys }
}

/// Everything the chart widget needs for one render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderConfig {
    pub series: Vec<Series>,
    pub categories: Vec<String>,
    pub size: ChartSize,
    pub options: ChartOptions,
    pub y_axis_ticks: Vec<AxisTick>,
}

/// Combine computed chart data with the sizing decision and fixed options.
pub fn render_config(
    chart: &ChartData,
    viewport_height: u32,
    sizing: &SizingPolicy,
) -> RenderConfig {
    RenderConfig {
        series: chart.series.clone(),
        categories: chart.categories.clone(),
        size: sizing.size(viewport_height, chart.categories.len()),
        options: ChartOptions::fixed(),
        y_axis_ticks: y_axis_ticks(stack_peak(chart)),
    }
}

/// Capacity totals for one node across all its non-DISKLESS pools.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeCapacity {
    pub node: String,
    pub pools: usize,
    pub total: f64,
    pub used: f64,
    pub free: f64,
    pub total_human: String,
    pub used_human: String,
    pub free_human: String,
}

/// Per-node totals in chart category order.
pub fn node_capacities(samples: &[CapacitySample]) -> Vec<NodeCapacity> {
    let kept = filter_samples(samples);
    let index = index_samples(&kept);
    let aggregates = aggregate(&index);

    index
        .node_keys
        .iter()
        .map(|node| {
            let total = aggregates.node_total(node);
            let used = aggregates.node_used(node);
            let free = total - used;
            NodeCapacity {
                node: node.clone(),
                pools: index.samples_for(node).len(),
                total,
                used,
                free,
                total_human: format_bytes(total),
                used_human: format_bytes(used),
                free_human: format_bytes(free),
            }
        })
        .collect()
}
