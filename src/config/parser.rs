use super::settings::AppConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

impl AppConfig {
    /// Parse the simple KEY="VALUE" config format. Unparseable values keep
    /// their previous setting.
    pub fn parse_ini(&mut self, contents: &str) {
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            match key {
                "PORT" => set_parsed(&mut self.port, value),
                "DEFAULT_VIEWPORT_HEIGHT" => set_parsed(&mut self.default_viewport_height, value),
                "TALL_VIEWPORT_MIN" => set_parsed(&mut self.sizing.tall_viewport_min, value),
                "TALL_CHART_HEIGHT" => set_parsed(&mut self.sizing.tall_chart_height, value),
                "SHORT_CHART_HEIGHT" => set_parsed(&mut self.sizing.short_chart_height, value),
                "SCROLL_MIN_NODES" => set_parsed(&mut self.sizing.scroll_min_nodes, value),
                "CATEGORY_WIDTH" => set_parsed(&mut self.sizing.category_width, value),
                "MAX_PALETTE_COLORS" => set_parsed(&mut self.max_palette_colors, value),
                "MAX_SAMPLES" => set_parsed(&mut self.max_samples, value),
                _ => {} // Ignore unknown keys
            }
        }
    }

    /// Save current config back to the config file.
    pub fn save(&self) -> Result<()> {
        let contents = format!(
            r#"# Capacity chart configuration
# Auto-generated, edit via the settings API
PORT="{}"
DEFAULT_VIEWPORT_HEIGHT="{}"
TALL_VIEWPORT_MIN="{}"
TALL_CHART_HEIGHT="{}"
SHORT_CHART_HEIGHT="{}"
SCROLL_MIN_NODES="{}"
CATEGORY_WIDTH="{}"
MAX_PALETTE_COLORS="{}"
MAX_SAMPLES="{}"
"#,
            self.port,
            self.default_viewport_height,
            self.sizing.tall_viewport_min,
            self.sizing.tall_chart_height,
            self.sizing.short_chart_height,
            self.sizing.scroll_min_nodes,
            self.sizing.category_width,
            self.max_palette_colors,
            self.max_samples,
        );

        if let Some(parent) = Path::new(&self.config_path).parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.config_path, contents)
            .with_context(|| format!("Failed to write config to {}", self.config_path))?;

        Ok(())
    }
}

fn set_parsed<T: std::str::FromStr>(slot: &mut T, value: &str) {
    if let Ok(v) = value.parse() {
        *slot = v;
    }
}
