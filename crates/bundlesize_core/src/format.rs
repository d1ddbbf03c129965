const UNITS: &[&str] = &["B", "kB", "MB", "GB", "TB", "PB"];
const BASE: f64 = 1000.0;

/// Formats a byte count with decimal units, e.g. `1.5 kB` or `2.35 MB`.
///
/// Values are rounded to two decimals and trailing zeros are dropped.
pub fn format_size(bytes: u64) -> String {
    if bytes < 1000 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= BASE && unit < UNITS.len() - 1 {
        value /= BASE;
        unit += 1;
    }

    // Rounding can carry into the next unit (999_999 B -> 1000 kB)
    if (value * 100.0).round() / 100.0 >= BASE && unit < UNITS.len() - 1 {
        value /= BASE;
        unit += 1;
    }

    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1), "1 B");
        assert_eq!(format_size(999), "999 B");
    }

    #[test]
    fn test_format_kilobytes() {
        assert_eq!(format_size(1000), "1 kB");
        assert_eq!(format_size(1500), "1.5 kB");
        assert_eq!(format_size(12_346), "12.35 kB");
    }

    #[test]
    fn test_format_larger_units() {
        assert_eq!(format_size(2_350_000), "2.35 MB");
        assert_eq!(format_size(3_000_000_000), "3 GB");
    }

    #[test]
    fn test_format_rounding_carries_into_next_unit() {
        assert_eq!(format_size(999_999), "1 MB");
    }
}
