mod config_tests;
mod palette_tests;

use crate::capacity::{CapacitySample, ColorPair, ColorPaletteProvider};

pub(crate) fn sample(
    node: &str,
    pool: &str,
    total: Option<f64>,
    free: Option<f64>,
) -> CapacitySample {
    CapacitySample {
        node_name: node.to_string(),
        pool_name: pool.to_string(),
        provider_kind: "LVM_THIN".to_string(),
        total_capacity_bytes: total,
        free_capacity_bytes: free,
    }
}

pub(crate) fn diskless(node: &str, pool: &str) -> CapacitySample {
    CapacitySample { provider_kind: "DISKLESS".to_string(), ..sample(node, pool, None, None) }
}

/// Two nodes with two pools each plus a DISKLESS-only node3.
pub(crate) fn cluster_fixture() -> Vec<CapacitySample> {
    vec![
        sample("node1", "pool1", Some(1e9), Some(4e8)),
        sample("node1", "pool2", Some(2e9), Some(8e8)),
        sample("node2", "pool1", Some(1.5e9), Some(6e8)),
        sample("node2", "pool2", Some(1.8e9), Some(5e8)),
        diskless("node3", "diskless-pool"),
    ]
}

/// Palette with a fixed number of labelled pairs.
pub(crate) struct FixedPalette {
    pub size: usize,
}

impl ColorPaletteProvider for FixedPalette {
    fn pairs_for(&self, n: usize) -> Vec<ColorPair> {
        (0..n.clamp(1, self.size))
            .map(|i| ColorPair::new(format!("used-{i}"), format!("free-{i}")))
            .collect()
    }

    fn node_total_pair(&self) -> ColorPair {
        ColorPair::new("node-used", "node-free")
    }
}
