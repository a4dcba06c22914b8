use super::format::format_bytes;
use super::types::ChartData;
use serde::Serialize;
use std::collections::HashMap;

/// Number of y-axis ticks pre-rendered for the console, including zero.
const Y_AXIS_TICK_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendPosition {
    Bottom,
}

/// Presentation options the console renders every capacity chart with.
/// These are constants; nothing here depends on the samples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartOptions {
    pub chart_type: &'static str,
    pub stacked: bool,
    pub column_width: &'static str,
    pub legend_position: LegendPosition,
    pub data_labels: bool,
    /// Name of the formatter the console applies to y-axis tick values.
    pub y_axis_formatter: &'static str,
}

impl ChartOptions {
    pub const fn fixed() -> Self {
        Self {
            chart_type: "bar",
            stacked: true,
            column_width: "20%",
            legend_position: LegendPosition::Bottom,
            data_labels: false,
            y_axis_formatter: "bytes",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTick {
    pub value: f64,
    pub label: String,
}

/// Tallest stacked column: per group and node, the sum of that group's
/// series values. Negative segments do not raise the peak.
pub fn stack_peak(chart: &ChartData) -> f64 {
    let mut stacks: HashMap<&str, Vec<f64>> = HashMap::new();
    for series in &chart.series {
        let stack = stacks
            .entry(series.group.as_str())
            .or_insert_with(|| vec![0.0; chart.categories.len()]);
        for (slot, value) in stack.iter_mut().zip(&series.data) {
            *slot += value.max(0.0);
        }
    }
    stacks.values().flatten().copied().fold(0.0, f64::max)
}

/// Evenly spaced y-axis ticks from zero to `max`, labelled with the byte
/// formatter. A non-positive `max` yields a single zero tick.
pub fn y_axis_ticks(max: f64) -> Vec<AxisTick> {
    if !(max.is_finite() && max > 0.0) {
        return vec![AxisTick { value: 0.0, label: format_bytes(0.0) }];
    }

    let step = max / (Y_AXIS_TICK_COUNT - 1) as f64;
    (0..Y_AXIS_TICK_COUNT)
        .map(|i| {
            let value = step * i as f64;
            AxisTick { value, label: format_bytes(value) }
        })
        .collect()
}
