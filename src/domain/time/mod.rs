// SPDX-License-Identifier: MPL-2.0
//! EXIF capture-time parsing and local wall-clock formatting.
//!
//! EXIF stores the capture moment as three ASCII fields: a local date/time
//! without zone (`DateTimeOriginal`), a decimal fraction of a second
//! (`SubSecTimeOriginal`) and the local UTC offset (`OffsetTimeOriginal`).
//! Everything here is pure; reading and writing the fields lives in the
//! application layer.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeDelta, TimeZone, Timelike, Utc};

/// `DateTimeOriginal` layout.
pub const EXIF_DATE_TIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

const NANOS_PER_MILLI: u32 = 1_000_000;

/// Expected values of the three local-time fields for one photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedLocalTime {
    /// Wall-clock date/time, second precision (`2022:08:03 18:57:55`).
    pub date_time: String,
    /// Signed UTC offset (`+01:00`).
    pub offset: String,
    /// Milliseconds as EXIF fraction digits (`0`, `5`, `097`).
    pub sub_second: String,
}

/// Parses a `DateTimeOriginal` value.
#[must_use]
pub fn parse_date_time(text: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text.trim(), EXIF_DATE_TIME_FORMAT).ok()
}

/// Parses `SubSecTimeOriginal` fraction digits into nanoseconds.
///
/// `"5"` is half a second and `"097"` is 97 ms. Blank input is zero; digits
/// past nanosecond precision are ignored. Returns `None` for non-digits.
#[must_use]
pub fn parse_sub_second(text: &str) -> Option<u32> {
    let digits = text.trim();
    if digits.is_empty() {
        return Some(0);
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut nanos = 0_u32;
    for position in 0..9 {
        let digit = digits.as_bytes().get(position).map_or(0, |b| u32::from(b - b'0'));
        nanos = nanos * 10 + digit;
    }
    Some(nanos)
}

/// Parses a fixed `±HH:MM` (or `±HHMM`) offset.
#[must_use]
pub fn parse_offset(text: &str) -> Option<FixedOffset> {
    let text = text.trim();
    let (sign, rest) = match text.as_bytes().first()? {
        b'+' => (1, &text[1..]),
        b'-' => (-1, &text[1..]),
        _ => return None,
    };
    let compact = rest.replacen(':', "", 1);
    if compact.len() != 4 || !compact.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hours: i32 = compact[..2].parse().ok()?;
    let minutes: i32 = compact[2..].parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Formats an offset as `±HH:MM`.
#[must_use]
pub fn format_offset(offset: FixedOffset) -> String {
    let seconds = offset.local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.abs() / 60;
    format!("{sign}{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Formats nanoseconds as a three-digit millisecond count (`"097"`, `"500"`).
///
/// As fraction digits this reads back through [`parse_sub_second`] to the
/// same millisecond.
#[must_use]
pub fn format_sub_second(nanos: u32) -> String {
    let millis = (nanos / NANOS_PER_MILLI).min(999);
    format!("{millis:03}")
}

/// Combines the three stored fields into a UTC instant.
///
/// A missing offset means the stored wall clock is already UTC.
#[must_use]
pub fn capture_instant(
    local: NaiveDateTime,
    sub_second_nanos: u32,
    offset: Option<FixedOffset>,
) -> DateTime<Utc> {
    let offset = offset.unwrap_or_else(|| Utc.fix());
    let local = local + TimeDelta::nanoseconds(i64::from(sub_second_nanos));
    (local - TimeDelta::seconds(i64::from(offset.local_minus_utc()))).and_utc()
}

/// Expresses `instant` as wall-clock time in `zone`.
#[must_use]
pub fn derive_local_time<Z: TimeZone>(instant: DateTime<Utc>, zone: &Z) -> DerivedLocalTime {
    let local = instant.with_timezone(zone);
    DerivedLocalTime {
        date_time: local.naive_local().format(EXIF_DATE_TIME_FORMAT).to_string(),
        offset: format_offset(local.offset().fix()),
        sub_second: format_sub_second(local.nanosecond()),
    }
}

/// True when both instants fall in the same UTC minute.
#[must_use]
pub fn same_minute(a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
    a.timestamp().div_euclid(60) == b.timestamp().div_euclid(60)
}
