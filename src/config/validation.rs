use super::defaults::MAX_PALETTE_COLORS_LIMIT;
use super::settings::AppConfig;
use anyhow::Result;

impl AppConfig {
    /// Validate configuration values are sane.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(self.port > 0, "Port must be > 0");
        anyhow::ensure!(
            self.sizing.tall_chart_height > 0 && self.sizing.short_chart_height > 0,
            "Chart heights must be > 0"
        );
        anyhow::ensure!(self.sizing.scroll_min_nodes >= 1, "scroll_min_nodes must be >= 1");
        anyhow::ensure!(self.sizing.category_width > 0, "category_width must be > 0");
        anyhow::ensure!(
            (1..=MAX_PALETTE_COLORS_LIMIT).contains(&self.max_palette_colors),
            "max_palette_colors must be between 1 and {MAX_PALETTE_COLORS_LIMIT}"
        );
        anyhow::ensure!(self.max_samples >= 1, "max_samples must be >= 1");
        Ok(())
    }
}
