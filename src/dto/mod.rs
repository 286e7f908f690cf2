//! DTO modules that bridge services with templates.

use chrono::{DateTime, NaiveDateTime};

pub mod column_mappings;
pub mod listing;
pub mod panes;
pub mod rows;

/// Renders a backend timestamp as `YYYY-MM-DD HH:MM:SS`.
///
/// Accepts RFC 3339 and zone-less ISO timestamps; anything else is shown as
/// received.
pub fn format_timestamp(raw: &str) -> String {
    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format(FORMAT).to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format(FORMAT).to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_known_timestamp_shapes() {
        assert_eq!(
            format_timestamp("2025-10-04T19:52:07.123456"),
            "2025-10-04 19:52:07"
        );
        assert_eq!(
            format_timestamp("2025-10-04T19:52:07Z"),
            "2025-10-04 19:52:07"
        );
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
