use super::*;

// =============================================================
// Parsing
// =============================================================

#[test]
fn parses_utc_timestamp() {
    assert_eq!(parse_timestamp("1970-01-01T00:00:00Z"), Some(0));
    assert_eq!(parse_timestamp("1970-01-02T00:00:00Z"), Some(MS_PER_DAY));
}

#[test]
fn naive_timestamp_reads_as_utc() {
    assert_eq!(
        parse_timestamp("1970-01-01T01:30:00"),
        Some(MS_PER_HOUR + 30 * MS_PER_MINUTE)
    );
}

#[test]
fn parses_positive_offset() {
    // 09:00+09:00 is midnight UTC.
    assert_eq!(parse_timestamp("1970-01-01T09:00:00+09:00"), Some(0));
}

#[test]
fn parses_negative_offset() {
    assert_eq!(
        parse_timestamp("1969-12-31T19:00:00-05:00"),
        Some(0)
    );
}

#[test]
fn parses_fractional_seconds() {
    assert_eq!(parse_timestamp("1970-01-01T00:00:00.250Z"), Some(250));
    assert_eq!(parse_timestamp("1970-01-01T00:00:00.5Z"), Some(500));
}

#[test]
fn accepts_space_separator() {
    assert_eq!(parse_timestamp("1970-01-01 00:01:00"), Some(MS_PER_MINUTE));
}

#[test]
fn modern_date_round_trips_through_format() {
    let ms = parse_timestamp("2025-08-24T13:45:10Z").expect("parses");
    assert_eq!(format_date(ms), "2025-08-24 13:45");
}

#[test]
fn leap_day_round_trips() {
    let ms = parse_timestamp("2024-02-29T00:00:00Z").expect("parses");
    assert_eq!(format_date(ms), "2024-02-29 00:00");
}

#[test]
fn rejects_garbage() {
    assert_eq!(parse_timestamp("yesterday"), None);
    assert_eq!(parse_timestamp("2025-13-01T00:00:00Z"), None);
    assert_eq!(parse_timestamp(""), None);
}

// =============================================================
// Relative formatting
// =============================================================

#[test]
fn under_a_minute_is_just_now() {
    assert_eq!(format_relative(0, 59 * 1000), "just now");
}

#[test]
fn minutes_before_hours() {
    assert_eq!(format_relative(0, 5 * MS_PER_MINUTE), "5m ago");
    assert_eq!(format_relative(0, 59 * MS_PER_MINUTE), "59m ago");
}

#[test]
fn hours_before_days() {
    assert_eq!(format_relative(0, MS_PER_HOUR), "1h ago");
    assert_eq!(format_relative(0, 23 * MS_PER_HOUR), "23h ago");
}

#[test]
fn days_win_over_everything() {
    assert_eq!(format_relative(0, 3 * MS_PER_DAY + MS_PER_HOUR), "3d ago");
}

#[test]
fn future_timestamps_read_as_just_now() {
    assert_eq!(format_relative(10 * MS_PER_MINUTE, 0), "just now");
}
