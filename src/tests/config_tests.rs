use crate::capacity::SizingPolicy;
use crate::config::AppConfig;

#[test]
fn test_parse_ini() {
    let mut config = AppConfig::default();
    let ini = r#"
# local overrides
PORT="7100"
DEFAULT_VIEWPORT_HEIGHT="1080"
TALL_VIEWPORT_MIN="1000"
SCROLL_MIN_NODES="8"
CATEGORY_WIDTH="250"
MAX_PALETTE_COLORS="12"
UNKNOWN_KEY="ignored"
"#;
    config.parse_ini(ini);
    assert_eq!(config.port, 7100);
    assert_eq!(config.default_viewport_height, 1080);
    assert_eq!(config.sizing.tall_viewport_min, 1000);
    assert_eq!(config.sizing.scroll_min_nodes, 8);
    assert_eq!(config.sizing.category_width, 250);
    assert_eq!(config.max_palette_colors, 12);
    // untouched keys keep their defaults
    assert_eq!(config.sizing.tall_chart_height, 500);
}

#[test]
fn test_parse_ini_keeps_value_on_garbage() {
    let mut config = AppConfig::default();
    config.parse_ini("PORT=\"not-a-port\"\nMAX_SAMPLES=\"-3\"");
    assert_eq!(config.port, AppConfig::default().port);
    assert_eq!(config.max_samples, AppConfig::default().max_samples);
}

#[test]
fn test_default_config_validates() {
    let config = AppConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.sizing, SizingPolicy::default());
}

#[test]
fn test_validate_rejects_bad_values() {
    let mut config = AppConfig::default();
    config.max_palette_colors = 0;
    assert!(config.validate().is_err());

    let mut config = AppConfig::default();
    config.max_palette_colors = 361;
    assert!(config.validate().is_err());

    let mut config = AppConfig::default();
    config.sizing.category_width = 0;
    assert!(config.validate().is_err());

    let mut config = AppConfig::default();
    config.sizing.scroll_min_nodes = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_save_round_trips_through_parser() {
    let dir = std::env::temp_dir().join(format!("capacity-chart-test-{}", std::process::id()));
    let mut config = AppConfig {
        config_path: dir.join("capacity-chart.cfg").to_string_lossy().into_owned(),
        ..AppConfig::default()
    };
    config.sizing.short_chart_height = 320;
    config.max_samples = 500;
    config.save().unwrap();

    let contents = std::fs::read_to_string(&config.config_path).unwrap();
    let mut loaded = AppConfig::default();
    loaded.parse_ini(&contents);
    assert_eq!(loaded.sizing.short_chart_height, 320);
    assert_eq!(loaded.max_samples, 500);

    std::fs::remove_dir_all(&dir).unwrap();
}
