use serde::{Deserialize, Serialize};

/// Related colors for one stacked pool: a strong shade for used space and a
/// lighter shade of the same hue for free space.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorPair {
    pub used: String,
    pub free: String,
}

impl ColorPair {
    pub fn new(used: impl Into<String>, free: impl Into<String>) -> Self {
        Self { used: used.into(), free: free.into() }
    }
}

/// Source of series colors. Injected so tests can use a fixed palette.
pub trait ColorPaletteProvider: Send + Sync {
    /// Pairs for `n` pools. May return fewer than `n`; callers wrap around.
    /// An empty list makes every pool fall back to `node_total_pair`.
    fn pairs_for(&self, n: usize) -> Vec<ColorPair>;

    /// Pair for the aggregate all-pools series, distinct from every pool pair.
    fn node_total_pair(&self) -> ColorPair;
}

const NODE_TOTAL_USED: &str = "#595959";
const NODE_TOTAL_FREE: &str = "#c8c8c8";

const USED_SATURATION: f64 = 0.65;
const USED_LIGHTNESS: f64 = 0.45;
const FREE_SATURATION: f64 = 0.45;
const FREE_LIGHTNESS: f64 = 0.75;

/// Default palette: hues evenly spaced around the color wheel.
///
/// Pool pairs are always saturated, the node-total pair is grey, so the two
/// can never coincide.
#[derive(Debug, Clone, Copy)]
pub struct HuePalette {
    max_colors: usize,
}

impl HuePalette {
    pub fn new(max_colors: usize) -> Self {
        Self { max_colors: max_colors.max(1) }
    }

    pub const fn max_colors(&self) -> usize {
        self.max_colors
    }
}

impl ColorPaletteProvider for HuePalette {
    fn pairs_for(&self, n: usize) -> Vec<ColorPair> {
        let count = n.clamp(1, self.max_colors);
        (0..count)
            .map(|i| {
                let hue = i as f64 * 360.0 / count as f64;
                ColorPair::new(
                    hsl_to_hex(hue, USED_SATURATION, USED_LIGHTNESS),
                    hsl_to_hex(hue, FREE_SATURATION, FREE_LIGHTNESS),
                )
            })
            .collect()
    }

    fn node_total_pair(&self) -> ColorPair {
        ColorPair::new(NODE_TOTAL_USED, NODE_TOTAL_FREE)
    }
}

/// Convert HSL (hue in degrees, saturation/lightness in 0..=1) to `#rrggbb`.
pub fn hsl_to_hex(hue: f64, saturation: f64, lightness: f64) -> String {
    let h = hue.rem_euclid(360.0) / 60.0;
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
    let m = lightness - chroma / 2.0;

    let (r, g, b) = match h as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    format!("#{:02x}{:02x}{:02x}", channel(r), channel(g), channel(b))
}
