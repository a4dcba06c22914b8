use super::index::NodeIndex;
use std::collections::HashMap;

/// Derived capacity figures for one pipeline run.
///
/// The per-pool vectors are aligned with `NodeIndex::node_keys`.
#[derive(Debug, Default, PartialEq)]
pub struct Aggregates {
    pub node_total: HashMap<String, f64>,
    pub node_used: HashMap<String, f64>,
    pub per_pool_total_by_node: HashMap<String, Vec<f64>>,
    pub per_pool_free_by_node: HashMap<String, Vec<f64>>,
}

impl Aggregates {
    pub fn node_total(&self, node: &str) -> f64 {
        self.node_total.get(node).copied().unwrap_or(0.0)
    }

    pub fn node_used(&self, node: &str) -> f64 {
        self.node_used.get(node).copied().unwrap_or(0.0)
    }

    pub fn pool_totals(&self, pool: &str) -> &[f64] {
        self.per_pool_total_by_node.get(pool).map_or(&[][..], Vec::as_slice)
    }

    pub fn pool_frees(&self, pool: &str) -> &[f64] {
        self.per_pool_free_by_node.get(pool).map_or(&[][..], Vec::as_slice)
    }
}

/// Compute per-node sums and per-(pool, node) total/free columns.
///
/// A node that does not report a pool contributes 0 total and 0 free for it.
pub fn aggregate(index: &NodeIndex<'_>) -> Aggregates {
    let mut aggregates = Aggregates::default();

    for node in &index.node_keys {
        let samples = index.samples_for(node);
        let total: f64 = samples.iter().map(|s| s.total()).sum();
        let used: f64 = samples.iter().map(|s| s.used()).sum();
        aggregates.node_total.insert(node.clone(), total);
        aggregates.node_used.insert(node.clone(), used);
    }

    for pool in &index.pool_keys {
        let (totals, frees): (Vec<f64>, Vec<f64>) = index
            .node_keys
            .iter()
            .map(|node| index.sample(node, pool).map_or((0.0, 0.0), |s| (s.total(), s.free())))
            .unzip();
        aggregates.per_pool_total_by_node.insert(pool.clone(), totals);
        aggregates.per_pool_free_by_node.insert(pool.clone(), frees);
    }

    aggregates
}
