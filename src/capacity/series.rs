use super::aggregate::Aggregates;
use super::index::NodeIndex;
use super::palette::ColorPaletteProvider;
use super::types::{Series, NODE_ALL_GROUP};
use tracing::warn;

// The unclosed tag in the used label is what the console has always shown.
fn pool_used_label(pool: &str) -> String {
    format!("{pool} - <b>Used<b>")
}

fn pool_free_label(pool: &str) -> String {
    format!("{pool} - <b>Free</b>")
}

const NODE_USED_LABEL: &str = "Node - <b>Used</b>";
const NODE_FREE_LABEL: &str = "Node - <b>Free</b>";

/// Build the stacked series: a used/free pair per pool in pool order, then
/// the all-pools pair when more than one pool exists.
pub fn build_series(
    index: &NodeIndex<'_>,
    aggregates: &Aggregates,
    palette: &dyn ColorPaletteProvider,
) -> Vec<Series> {
    let pool_count = index.pool_keys.len();
    if pool_count == 0 {
        return Vec::new();
    }

    let mut pairs = palette.pairs_for(pool_count);
    if pairs.is_empty() {
        warn!("Color palette returned no pairs for {} pools, using node-total colors", pool_count);
        pairs.push(palette.node_total_pair());
    }
    let mut series = Vec::with_capacity(pool_count * 2 + 2);

    for (idx, pool) in index.pool_keys.iter().enumerate() {
        let pair = &pairs[idx % pairs.len()];

        let totals = aggregates.pool_totals(pool);
        let frees = aggregates.pool_frees(pool);
        let used_data: Vec<f64> = totals.iter().zip(frees).map(|(t, f)| t - f).collect();

        series.push(Series {
            name: pool_used_label(pool),
            group: pool.clone(),
            data: used_data,
            color: pair.used.clone(),
        });
        series.push(Series {
            name: pool_free_label(pool),
            group: pool.clone(),
            data: frees.to_vec(),
            color: pair.free.clone(),
        });
    }

    if pool_count > 1 {
        let node_pair = palette.node_total_pair();
        let used: Vec<f64> = index.node_keys.iter().map(|n| aggregates.node_used(n)).collect();
        let free: Vec<f64> = index
            .node_keys
            .iter()
            .map(|n| aggregates.node_total(n) - aggregates.node_used(n))
            .collect();

        series.push(Series {
            name: NODE_USED_LABEL.to_string(),
            group: NODE_ALL_GROUP.to_string(),
            data: used,
            color: node_pair.used,
        });
        series.push(Series {
            name: NODE_FREE_LABEL.to_string(),
            group: NODE_ALL_GROUP.to_string(),
            data: free,
            color: node_pair.free,
        });
    }

    series
}
