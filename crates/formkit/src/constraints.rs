//! Format predicates used by the built-in date, time and color validators.
//!
//! All are pure `&str -> bool` checks. Dates are checked structurally first
//! (strict `YYYY-MM-DD` shape) and then for calendar validity via chrono,
//! which rejects things like `2023-02-30` that a shape check alone would let
//! through.

use chrono::NaiveDate;

/// Strict `YYYY-MM-DD` check plus calendar validity.
pub fn is_valid_date_string(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != 4 && *i != 7)
        .all(|(_, b)| b.is_ascii_digit());
    if !digits_ok {
        return false;
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

/// `HH:MM` or `HH:MM:SS`, 24-hour clock, zero-padded.
pub fn is_valid_time_string(value: &str) -> bool {
    let parts: Vec<&str> = value.split(':').collect();
    if parts.len() != 2 && parts.len() != 3 {
        return false;
    }

    let in_range = |part: &str, max: u8| -> bool {
        if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        part.parse::<u8>().map(|n| n <= max).unwrap_or(false)
    };

    in_range(parts[0], 23)
        && in_range(parts[1], 59)
        && parts.get(2).map(|s| in_range(s, 59)).unwrap_or(true)
}

/// `#RGB` or `#RRGGBB`.
pub fn is_valid_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    (digits.len() == 3 || digits.len() == 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_string_valid() {
        assert!(is_valid_date_string("2024-03-15"));
        assert!(is_valid_date_string("2024-02-29")); // leap year
        assert!(is_valid_date_string("1999-12-31"));
    }

    #[test]
    fn test_date_string_invalid() {
        assert!(!is_valid_date_string("2023-02-29")); // not a leap year
        assert!(!is_valid_date_string("2024-13-01"));
        assert!(!is_valid_date_string("2024-3-15")); // not zero-padded
        assert!(!is_valid_date_string("15.03.2024"));
        assert!(!is_valid_date_string("2024-03-15T00:00:00"));
        assert!(!is_valid_date_string(""));
    }

    #[test]
    fn test_time_string_valid() {
        assert!(is_valid_time_string("00:00"));
        assert!(is_valid_time_string("23:59"));
        assert!(is_valid_time_string("14:02:26"));
    }

    #[test]
    fn test_time_string_invalid() {
        assert!(!is_valid_time_string("24:00"));
        assert!(!is_valid_time_string("12:60"));
        assert!(!is_valid_time_string("12:00:60"));
        assert!(!is_valid_time_string("9:15")); // not zero-padded
        assert!(!is_valid_time_string("12"));
        assert!(!is_valid_time_string("12:00:00:00"));
    }

    #[test]
    fn test_hex_color() {
        assert!(is_valid_hex_color("#fff"));
        assert!(is_valid_hex_color("#A1B2C3"));
        assert!(!is_valid_hex_color("fff"));
        assert!(!is_valid_hex_color("#ffff"));
        assert!(!is_valid_hex_color("#ggg"));
        assert!(!is_valid_hex_color("#"));
    }
}
