use super::sample;
use crate::capacity::{compute_chart_data, hsl_to_hex, ColorPaletteProvider, HuePalette};
use std::collections::HashSet;

#[test]
fn test_hsl_to_hex_primaries() {
    assert_eq!(hsl_to_hex(0.0, 1.0, 0.5), "#ff0000");
    assert_eq!(hsl_to_hex(120.0, 1.0, 0.5), "#00ff00");
    assert_eq!(hsl_to_hex(240.0, 1.0, 0.5), "#0000ff");
    assert_eq!(hsl_to_hex(360.0, 1.0, 0.5), "#ff0000");
    assert_eq!(hsl_to_hex(0.0, 0.0, 0.5), "#808080");
}

#[test]
fn test_pairs_are_deterministic() {
    let palette = HuePalette::new(24);
    assert_eq!(palette.pairs_for(5), palette.pairs_for(5));
    assert_eq!(palette.pairs_for(5).len(), 5);
}

#[test]
fn test_pairs_capped_by_palette_size() {
    let palette = HuePalette::new(4);
    assert_eq!(palette.max_colors(), 4);
    assert_eq!(palette.pairs_for(10).len(), 4);
    assert_eq!(palette.pairs_for(0).len(), 1);
}

#[test]
fn test_used_colors_distinct_up_to_palette_size() {
    let palette = HuePalette::new(360);
    for n in [2, 7, 24, 100, 360] {
        let pairs = palette.pairs_for(n);
        let used: HashSet<&str> = pairs.iter().map(|p| p.used.as_str()).collect();
        assert_eq!(used.len(), n, "used colors collide for {n} pools");
        for pair in &pairs {
            assert_ne!(pair.used, pair.free);
        }
    }
}

#[test]
fn test_node_total_pair_never_matches_pool_pair() {
    let palette = HuePalette::new(360);
    let node = palette.node_total_pair();
    for pair in palette.pairs_for(360) {
        assert_ne!(pair.used, node.used);
        assert_ne!(pair.free, node.free);
    }
}

#[test]
fn test_distinct_pools_get_distinct_used_colors_in_chart() {
    let samples: Vec<_> = (0..6)
        .map(|i| sample(&format!("node{}", i % 2), &format!("pool{i}"), Some(10.0), Some(5.0)))
        .collect();
    let chart = compute_chart_data(&samples, &HuePalette::new(24));

    let used: Vec<&str> = chart
        .series
        .iter()
        .filter(|s| s.name.ends_with("<b>Used<b>"))
        .map(|s| s.color.as_str())
        .collect();
    assert_eq!(used.len(), 6);
    assert_eq!(used.iter().collect::<HashSet<_>>().len(), 6);

    // same pool, same pair across runs
    let again = compute_chart_data(&samples, &HuePalette::new(24));
    assert_eq!(chart.series, again.series);
}
