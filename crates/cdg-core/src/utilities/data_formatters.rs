//! Data formatting helpers.
//!
//! Human-readable renderings shown next to form fields: Brazilian date
//! strings and file sizes.

/// Reformat an ISO `YYYY-MM-DD` string as `DD/MM/YYYY`.
///
/// Works on the text alone so no time zone can shift the day.  Returns an
/// empty string when the input does not have three `-`-separated parts.
pub fn format_brazilian_date(iso: &str) -> String {
    let mut parts = iso.trim().split('-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(y), Some(m), Some(d)) if !y.is_empty() && !m.is_empty() && !d.is_empty() => {
            format!("{d:0>2}/{m:0>2}/{y}")
        }
        _ => String::new(),
    }
}

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Format a byte count with a binary (1024) unit, at most two decimals and
/// no trailing zeros (e.g. `1536` → `"1.5 KB"`, `0` → `"0 Bytes"`).
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", SIZE_UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_brazilian_date() {
        assert_eq!(format_brazilian_date("2025-01-07"), "07/01/2025");
        assert_eq!(format_brazilian_date("2025-1-7"), "07/01/2025");
        assert_eq!(format_brazilian_date(""), "");
        assert_eq!(format_brazilian_date("2025-01"), "");
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(200 * 1024 * 1024), "200 MB");
        assert_eq!(format_file_size(500 * 1024 * 1024), "500 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
        assert_eq!(format_file_size(1_234_567), "1.18 MB");
    }

    proptest::proptest! {
        #[test]
        fn file_size_has_a_unit(bytes in 1u64..(1u64 << 40)) {
            let text = format_file_size(bytes);
            let (number, unit) = text.split_once(' ').unwrap();
            proptest::prop_assert!(SIZE_UNITS.contains(&unit));
            proptest::prop_assert!(!number.ends_with('0') || !number.contains('.'));
            let value: f64 = number.parse().unwrap();
            proptest::prop_assert!((value > 0.0 && value <= 1024.0) || unit == "GB");
        }
    }
}
