use serde::{Deserialize, Serialize};

/// Provider kind reported for pools with no local physical storage.
pub const DISKLESS_PROVIDER: &str = "DISKLESS";

/// Stacking group of the synthesized all-pools series.
pub const NODE_ALL_GROUP: &str = "NodeAll";

/// One observed (node, pool) capacity reading at fetch time.
///
/// Field names follow the console's camelCase payload; the snake_case names
/// emitted by the storage backend are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacitySample {
    #[serde(alias = "node_name")]
    pub node_name: String,
    #[serde(alias = "pool_name", alias = "storage_pool_name")]
    pub pool_name: String,
    #[serde(alias = "provider_kind")]
    pub provider_kind: String,
    #[serde(default, alias = "total_capacity")]
    pub total_capacity_bytes: Option<f64>,
    #[serde(default, alias = "free_capacity")]
    pub free_capacity_bytes: Option<f64>,
}

impl CapacitySample {
    pub fn is_diskless(&self) -> bool {
        self.provider_kind == DISKLESS_PROVIDER
    }

    /// Total capacity with null/absent/non-finite coerced to zero.
    pub fn total(&self) -> f64 {
        capacity_or_zero(self.total_capacity_bytes)
    }

    /// Free capacity with null/absent/non-finite coerced to zero.
    pub fn free(&self) -> f64 {
        capacity_or_zero(self.free_capacity_bytes)
    }

    /// `total - free`. Not clamped: inconsistent inputs yield a negative value.
    pub fn used(&self) -> f64 {
        self.total() - self.free()
    }
}

/// The single place where missing capacity readings turn into zero.
pub fn capacity_or_zero(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// One plotted bar segment; `data[i]` belongs to the i-th node category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub group: String,
    pub data: Vec<f64>,
    pub color: String,
}

/// Chart-ready output of the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub series: Vec<Series>,
    pub categories: Vec<String>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.series.is_empty() && self.categories.is_empty()
    }
}
