/// Default location of the daemon's KEY="VALUE" config file.
pub(super) const DEFAULT_CONFIG_PATH: &str = "/etc/capacity-chart/capacity-chart.cfg";

/// Default port the daemon listens on (localhost only).
pub(super) const DEFAULT_PORT: u16 = 7092;

/// Viewport height assumed when a chart request does not send one.
pub(super) const DEFAULT_VIEWPORT_HEIGHT: u32 = 900;

/// Upper bound on distinct generated color pairs before pools share colors.
pub(super) const DEFAULT_MAX_PALETTE_COLORS: usize = 24;

/// Largest sample snapshot accepted from the collector.
pub(super) const DEFAULT_MAX_SAMPLES: usize = 10_000;

/// Hue spacing below one degree no longer yields distinct colors.
pub(super) const MAX_PALETTE_COLORS_LIMIT: usize = 360;
