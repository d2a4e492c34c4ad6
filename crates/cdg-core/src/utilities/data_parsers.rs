//! Data parsing helpers.
//!
//! Parse dates in the ISO `YYYY-MM-DD` form that HTML date inputs and API
//! payloads exchange.  Only the shape is checked here; range checks belong
//! to `Date`.

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
///
/// Returns `(year, month, day)` on success.
pub fn parse_iso_date(s: &str) -> Option<(u16, u8, u8)> {
    let s = s.trim();
    let mut parts = s.split('-');
    let (y, m, d) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() || y.len() != 4 || !(1..=2).contains(&m.len()) {
        return None;
    }
    if !(1..=2).contains(&d.len()) {
        return None;
    }
    Some((parse_digits(y)?, parse_digits(m)?, parse_digits(d)?))
}

// `str::parse` accepts a leading `+`, which no date form allows.
fn parse_digits<T: std::str::FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2023-06-15"), Some((2023, 6, 15)));
        assert_eq!(parse_iso_date(" 2025-12-29 "), Some((2025, 12, 29)));
        assert_eq!(parse_iso_date("2025-1-5"), Some((2025, 1, 5)));
        assert_eq!(parse_iso_date("bad"), None);
        assert_eq!(parse_iso_date(""), None);
        assert_eq!(parse_iso_date("2025-+1-05"), None);
        assert_eq!(parse_iso_date("25-01-05"), None);
        assert_eq!(parse_iso_date("2025-01-05T10:00"), None);
    }


    proptest::proptest! {
        #[test]
        fn padded_and_unpadded_iso_agree(y in 1000u16..=9999, m in 1u8..=12, d in 1u8..=31) {
            let padded = format!("{y:04}-{m:02}-{d:02}");
            let unpadded = format!("{y}-{m}-{d}");
            proptest::prop_assert_eq!(parse_iso_date(&padded), Some((y, m, d)));
            proptest::prop_assert_eq!(parse_iso_date(&unpadded), Some((y, m, d)));
        }
    }
}
