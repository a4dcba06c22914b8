use super::defaults::{
    DEFAULT_CONFIG_PATH, DEFAULT_MAX_PALETTE_COLORS, DEFAULT_MAX_SAMPLES, DEFAULT_PORT,
    DEFAULT_VIEWPORT_HEIGHT,
};
use crate::capacity::SizingPolicy;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub port: u16,
    pub config_path: String,
    /// Viewport height used when the console omits `viewport_height`.
    pub default_viewport_height: u32,
    pub sizing: SizingPolicy,
    /// Maximum number of distinct pool color pairs.
    pub max_palette_colors: usize,
    /// Snapshots larger than this are rejected.
    pub max_samples: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            config_path: DEFAULT_CONFIG_PATH.to_string(),
            default_viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            sizing: SizingPolicy::default(),
            max_palette_colors: DEFAULT_MAX_PALETTE_COLORS,
            max_samples: DEFAULT_MAX_SAMPLES,
        }
    }
}

impl AppConfig {
    /// Load configuration, merging defaults with config file values and env overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(path) = std::env::var("CAPCHART_CONFIG_PATH") {
            config.config_path = path;
        }
        if let Ok(port) = std::env::var("CAPCHART_PORT") {
            config.port = port.parse().context("CAPCHART_PORT must be a valid port number")?;
        }

        let cfg_path = Path::new(&config.config_path);
        if cfg_path.exists() {
            let contents = fs::read_to_string(cfg_path)
                .with_context(|| format!("Failed to read config file: {}", config.config_path))?;
            config.parse_ini(&contents);
        }

        config.validate()?;
        Ok(config)
    }
}
