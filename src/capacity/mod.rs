//! Capacity samples in, stacked per-node/per-pool chart series out.

mod aggregate;
mod cache;
mod filter;
mod format;
mod index;
mod options;
mod palette;
mod pipeline;
mod series;
mod sizing;
mod types;
mod validation;

pub use aggregate::{aggregate, Aggregates};
pub use cache::ChartCache;
pub use filter::filter_samples;
pub use format::format_bytes;
pub use index::{index_samples, NodeIndex};
pub use options::{stack_peak, y_axis_ticks, AxisTick, ChartOptions, LegendPosition};
pub use palette::{hsl_to_hex, ColorPair, ColorPaletteProvider, HuePalette};
pub use pipeline::{
    compute_chart_data, node_capacities, render_config, NodeCapacity, RenderConfig,
};
pub use series::build_series;
pub use sizing::{size_policy, ChartSize, SizingPolicy};
pub use types::{
    capacity_or_zero, CapacitySample, ChartData, Series, DISKLESS_PROVIDER, NODE_ALL_GROUP,
};
pub use validation::{validate_samples, SampleError};
