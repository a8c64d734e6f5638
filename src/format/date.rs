use chrono::{DateTime, FixedOffset};

/// Zero-padded day, abbreviated month, four-digit year: "05 Jan 2021".
const DISPLAY_PATTERN: &str = "%d %b %Y";

/// Offset without a colon, as some API timestamps carry ("+0000").
const OFFSET_PATTERN: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Format a publication timestamp for display.
///
/// Unparseable input is returned unchanged; showing the raw value beats
/// dropping the date from the page. Callers must not pass a missing
/// timestamp here, that case is theirs to handle.
pub fn format_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(parsed) => parsed.format(DISPLAY_PATTERN).to_string(),
        None => raw.to_string(),
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, OFFSET_PATTERN))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rfc3339_timestamp() {
        assert_eq!(format_date("2021-01-05T00:00:00Z"), "05 Jan 2021");
    }

    #[test]
    fn test_format_timestamp_with_bare_offset() {
        assert_eq!(format_date("2021-03-15T19:25:28+0000"), "15 Mar 2021");
    }

    #[test]
    fn test_format_pads_single_digit_day() {
        assert_eq!(format_date("2021-12-01T08:00:00+00:00"), "01 Dec 2021");
    }

    #[test]
    fn test_unparseable_input_returned_unchanged() {
        assert_eq!(format_date("yesterday"), "yesterday");
        assert_eq!(format_date("2021-13-40"), "2021-13-40");
    }

    #[test]
    fn test_empty_input_returned_unchanged() {
        assert_eq!(format_date(""), "");
    }
}
