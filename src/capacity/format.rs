const UNITS: [&str; 6] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB"];

/// Format a byte count with binary units: "1.5 GiB".
///
/// Negative values keep their sign; non-finite input renders as "0 B".
pub fn format_bytes(bytes: f64) -> String {
    if !bytes.is_finite() {
        return "0 B".to_string();
    }

    let sign = if bytes < 0.0 { "-" } else { "" };
    let mut value = bytes.abs();
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{sign}{value:.0} {}", UNITS[0])
    } else {
        format!("{sign}{value:.1} {}", UNITS[unit])
    }
}
