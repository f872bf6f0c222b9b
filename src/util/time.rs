//! Timestamp parsing and display formatting.
//!
//! The backend sends ISO-8601 strings; cards and comments display them
//! as coarse relative ages ("3h ago") and detail views as absolute UTC
//! datetimes. The arithmetic is pure over epoch milliseconds so it can
//! be unit tested; only [`display_age`] touches the browser clock.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

const MS_PER_MINUTE: i64 = 60 * 1000;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Parse an ISO-8601 timestamp (`YYYY-MM-DDTHH:MM:SS`, optional
/// fractional seconds, optional `Z` or `±HH:MM` offset, missing offset
/// read as UTC) into epoch milliseconds.
pub fn parse_timestamp(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    let (date, rest) = raw.split_at_checked(10)?;
    let mut date_parts = date.split('-');
    let year: i64 = date_parts.next()?.parse().ok()?;
    let month: u32 = date_parts.next()?.parse().ok()?;
    let day: u32 = date_parts.next()?.parse().ok()?;
    if date_parts.next().is_some() || !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }

    let rest = rest.strip_prefix(['T', ' ']).unwrap_or(rest);
    let (time, offset_ms) = split_offset(rest)?;

    let mut time_parts = time.splitn(3, ':');
    let hour: i64 = time_parts.next()?.parse().ok()?;
    let minute: i64 = time_parts.next()?.parse().ok()?;
    let second_field = time_parts.next().unwrap_or("0");
    let (second, millis) = parse_seconds(second_field)?;
    if !(0..24).contains(&hour) || !(0..60).contains(&minute) || !(0..61).contains(&second) {
        return None;
    }

    let days = days_from_civil(year, month, day);
    let ms = days * MS_PER_DAY
        + hour * MS_PER_HOUR
        + minute * MS_PER_MINUTE
        + second * 1000
        + millis;
    Some(ms - offset_ms)
}

/// Coarse relative age, largest unit wins: days, then hours, then
/// minutes, then "just now". A `then` in the future also reads as
/// "just now" (client clocks drift).
pub fn format_relative(then_ms: i64, now_ms: i64) -> String {
    let diff = now_ms - then_ms;
    if diff >= MS_PER_DAY {
        format!("{}d ago", diff / MS_PER_DAY)
    } else if diff >= MS_PER_HOUR {
        format!("{}h ago", diff / MS_PER_HOUR)
    } else if diff >= MS_PER_MINUTE {
        format!("{}m ago", diff / MS_PER_MINUTE)
    } else {
        "just now".to_owned()
    }
}

/// Absolute UTC rendering, `YYYY-MM-DD HH:MM`.
pub fn format_date(ms: i64) -> String {
    let days = ms.div_euclid(MS_PER_DAY);
    let rem = ms.rem_euclid(MS_PER_DAY);
    let (year, month, day) = civil_from_days(days);
    let hour = rem / MS_PER_HOUR;
    let minute = (rem % MS_PER_HOUR) / MS_PER_MINUTE;
    format!("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}")
}

/// Relative age of a server timestamp against the browser clock.
/// Unparseable input is shown as-is rather than hidden.
pub fn display_age(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(then_ms) => format_relative(then_ms, now_ms()),
        None => raw.to_owned(),
    }
}

/// Absolute rendering of a server timestamp for detail views.
pub fn display_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(ms) => format_date(ms),
        None => raw.to_owned(),
    }
}

fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        {
            js_sys::Date::now() as i64
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}

/// Split the time-of-day text from a trailing zone designator and
/// return the zone as a millisecond offset to subtract.
fn split_offset(rest: &str) -> Option<(&str, i64)> {
    if let Some(time) = rest.strip_suffix('Z') {
        return Some((time, 0));
    }
    // An offset sign can only appear after the HH:MM prefix; a bare
    // time has none.
    if rest.len() > 6 {
        let (time, zone) = rest.split_at(rest.len() - 6);
        let sign = match zone.as_bytes().first() {
            Some(b'+') => 1,
            Some(b'-') => -1,
            _ => return Some((rest, 0)),
        };
        let hours: i64 = zone.get(1..3)?.parse().ok()?;
        let minutes: i64 = zone.get(4..6)?.parse().ok()?;
        let offset = sign * (hours * MS_PER_HOUR + minutes * MS_PER_MINUTE);
        return Some((time, offset));
    }
    Some((rest, 0))
}

fn parse_seconds(field: &str) -> Option<(i64, i64)> {
    match field.split_once('.') {
        Some((whole, frac)) => {
            let second: i64 = whole.parse().ok()?;
            let frac: String = frac.chars().take(3).collect();
            let scale = 10_i64.pow(3 - u32::try_from(frac.len()).ok()?);
            let millis: i64 = if frac.is_empty() { 0 } else { frac.parse().ok()? };
            Some((second, millis * scale))
        }
        None => Some((field.parse().ok()?, 0)),
    }
}

// Civil-date conversions (proleptic Gregorian, days since 1970-01-01).

fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = i64::from((month + 9) % 12);
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    let (month, day) = (month as u32, day as u32);
    let year = if month <= 2 { y + 1 } else { y };
    (year, month, day)
}
