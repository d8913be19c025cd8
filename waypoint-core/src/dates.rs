//! Timestamp parsing and the three display forms used by point views.
//!
//! Offsets are folded into UTC wall time; views show that wall time as-is.

use chrono::{DateTime, NaiveDateTime};

use crate::point::PointDataError;

/// `datetime` attribute form, e.g. `2024-01-01T10:00`.
pub const DATETIME_ATTR_FORMAT: &str = "%Y-%m-%dT%H:%M";
/// Leading label form, e.g. `Jan 01`.
pub const SHORT_DATE_FORMAT: &str = "%b %d";
/// Start/end field form, e.g. `10:00`.
pub const TIME_FORMAT: &str = "%H:%M";

const MINUTES_PER_HOUR: i64 = 60;
const MINUTES_PER_DAY: i64 = 24 * MINUTES_PER_HOUR;

/// Offset forms without seconds, which RFC 3339 parsing rejects.
const OFFSET_FORMATS: [&str; 1] = ["%Y-%m-%dT%H:%M%:z"];

const NAIVE_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%MZ",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-like timestamp as sent by the trip API.
///
/// RFC 3339 values (`2024-01-01T10:00:00.000Z`) are converted to UTC, as are
/// offset values without seconds (`2024-01-01T10:00Z`, `2024-01-01T12:00+02:00`).
/// Values without an offset are taken as-is, with or without seconds.
///
/// # Errors
///
/// Returns [`PointDataError::Timestamp`] if no supported layout matches.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, PointDataError> {
    let trimmed = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(with_offset.naive_utc());
    }
    if let Some(with_offset) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(trimmed, fmt).ok())
    {
        return Ok(with_offset.naive_utc());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| PointDataError::Timestamp {
            value: raw.to_string(),
        })
}

#[must_use]
pub fn format_datetime_attr(ts: &NaiveDateTime) -> String {
    ts.format(DATETIME_ATTR_FORMAT).to_string()
}

#[must_use]
pub fn format_short_date(ts: &NaiveDateTime) -> String {
    ts.format(SHORT_DATE_FORMAT).to_string()
}

#[must_use]
pub fn format_time(ts: &NaiveDateTime) -> String {
    ts.format(TIME_FORMAT).to_string()
}

/// Whole minutes between two timestamps, clamped at zero.
#[must_use]
pub fn duration_minutes(from: &NaiveDateTime, to: &NaiveDateTime) -> i64 {
    (*to - *from).num_minutes().max(0)
}

/// Human-readable span between start and end.
///
/// `01D 02H 30M` when a day or more, `02H 30M` when an hour or more,
/// otherwise `45M`. An end before the start renders as `00M`.
#[must_use]
pub fn point_duration(from: &NaiveDateTime, to: &NaiveDateTime) -> String {
    let total = duration_minutes(from, to);
    let days = total / MINUTES_PER_DAY;
    let hours = (total % MINUTES_PER_DAY) / MINUTES_PER_HOUR;
    let minutes = total % MINUTES_PER_HOUR;

    if days > 0 {
        format!("{days:02}D {hours:02}H {minutes:02}M")
    } else if hours > 0 {
        format!("{hours:02}H {minutes:02}M")
    } else {
        format!("{minutes:02}M")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(raw: &str) -> NaiveDateTime {
        parse_timestamp(raw).unwrap()
    }

    #[test]
    fn parses_supported_layouts() {
        let expected = ts("2024-01-01T10:00");
        assert_eq!(ts("2024-01-01T10:00:00"), expected);
        assert_eq!(ts("2024-01-01T10:00:00.000Z"), expected);
        assert_eq!(ts("2024-01-01 10:00"), expected);
        assert_eq!(ts(" 2024-01-01T10:00 "), expected);
    }

    #[test]
    fn offsets_are_folded_into_utc() {
        assert_eq!(ts("2024-01-01T12:00:00+02:00"), ts("2024-01-01T10:00"));
    }

    #[test]
    fn offset_forms_without_seconds() {
        let expected = ts("2024-01-01T10:00");
        assert_eq!(ts("2024-01-01T10:00Z"), expected);
        assert_eq!(ts("2024-01-01T12:00+02:00"), expected);
        assert_eq!(ts("2024-01-01T07:30-02:30"), expected);
    }

    #[test]
    fn rejects_unknown_layouts() {
        let err = parse_timestamp("01/01/2024").unwrap_err();
        assert_eq!(
            err,
            PointDataError::Timestamp {
                value: "01/01/2024".to_string()
            }
        );
        assert!(parse_timestamp("").is_err());
    }

    #[test]
    fn formats_three_display_forms() {
        let start = ts("2024-03-18T09:05:00.000Z");
        assert_eq!(format_datetime_attr(&start), "2024-03-18T09:05");
        assert_eq!(format_short_date(&start), "Mar 18");
        assert_eq!(format_time(&start), "09:05");
    }

    #[test]
    fn duration_picks_largest_unit() {
        let start = ts("2024-01-01T10:00");
        assert_eq!(point_duration(&start, &ts("2024-01-01T10:45")), "45M");
        assert_eq!(point_duration(&start, &ts("2024-01-01T12:30")), "02H 30M");
        assert_eq!(point_duration(&start, &ts("2024-01-02T12:30")), "01D 02H 30M");
        assert_eq!(point_duration(&start, &ts("2024-01-03T10:00")), "02D 00H 00M");
    }

    #[test]
    fn duration_clamps_reversed_ranges() {
        let start = ts("2024-01-01T10:00");
        assert_eq!(point_duration(&start, &ts("2024-01-01T09:00")), "00M");
        assert_eq!(duration_minutes(&start, &start), 0);
    }
}
