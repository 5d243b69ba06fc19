//! Serialization of schema.org date/time values.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

/// Format an instant the way schema.org `DateTime` values are written:
/// RFC 3339 with an explicit offset, e.g. `2024-01-15T00:00:00+00:00`.
pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// Serializer for optional datetime properties; pair with
/// `skip_serializing_if = "Option::is_none"`.
pub fn serialize_optional<S>(
    value: &Option<DateTime<Utc>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(value) => serializer.serialize_str(&format_datetime(value)),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_explicit_offset() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(format_datetime(&instant), "2024-01-15T00:00:00+00:00");
    }

    #[test]
    fn test_time_of_day_preserved() {
        let instant = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(format_datetime(&instant), "2023-12-31T23:59:59+00:00");
    }
}
