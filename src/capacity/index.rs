use super::types::CapacitySample;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

/// Samples grouped by node, plus the ordered node and pool key sets.
#[derive(Debug, Default)]
pub struct NodeIndex<'a> {
    pub by_node: HashMap<&'a str, Vec<&'a CapacitySample>>,
    /// Distinct node names in first-seen order.
    pub node_keys: Vec<String>,
    /// Union of pool names across nodes, first occurrence wins position.
    pub pool_keys: Vec<String>,
    /// node -> pool -> first sample reported for that pair.
    lookup: HashMap<&'a str, HashMap<&'a str, &'a CapacitySample>>,
}

impl<'a> NodeIndex<'a> {
    /// The sample for a (node, pool) pair, if that node reports the pool.
    pub fn sample(&self, node: &str, pool: &str) -> Option<&'a CapacitySample> {
        self.lookup.get(node).and_then(|pools| pools.get(pool)).copied()
    }

    pub fn samples_for(&self, node: &str) -> &[&'a CapacitySample] {
        self.by_node.get(node).map_or(&[][..], Vec::as_slice)
    }
}

/// Group already-filtered samples by node and compute the key sets.
///
/// Order is grouping order, never alphabetical.
pub fn index_samples<'a>(samples: &[&'a CapacitySample]) -> NodeIndex<'a> {
    let mut by_node: HashMap<&'a str, Vec<&'a CapacitySample>> = HashMap::new();
    let mut node_keys = Vec::new();
    let mut lookup: HashMap<&'a str, HashMap<&'a str, &'a CapacitySample>> = HashMap::new();

    for &sample in samples {
        let node = sample.node_name.as_str();
        match by_node.entry(node) {
            Entry::Occupied(mut e) => e.get_mut().push(sample),
            Entry::Vacant(e) => {
                node_keys.push(node.to_string());
                e.insert(vec![sample]);
            }
        }
        lookup
            .entry(node)
            .or_default()
            .entry(sample.pool_name.as_str())
            .or_insert(sample);
    }

    let mut seen_pools: HashSet<&str> = HashSet::new();
    let mut pool_keys = Vec::new();
    for node in &node_keys {
        let Some(node_samples) = by_node.get(node.as_str()) else {
            continue;
        };
        for &sample in node_samples {
            if seen_pools.insert(sample.pool_name.as_str()) {
                pool_keys.push(sample.pool_name.clone());
            }
        }
    }

    NodeIndex { by_node, node_keys, pool_keys, lookup }
}
