//! Display formatters for record fields
//!
//! Pure formatting helpers used wherever a record is rendered for an
//! operator: phone numbers, 억/만원 prices, and the Korean date/time
//! forms the back office expects. All of them are total: malformed
//! input comes back as `None` or `"-"`, never a panic.
//!
//! Note the deliberate timezone split: [`format_date`] shifts +9 hours
//! (UTC→KST) before rendering, while the time half of
//! [`format_date_time`] and [`format_to_iso_datetime`] render the
//! timestamp as parsed. This mirrors the behavior call sites already
//! depend on.

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};

/// Format a phone number with Korean dash grouping.
///
/// Non-digits are stripped first; input with no digits at all yields
/// `None`. The `02` Seoul prefix keeps 2 digits, every other prefix
/// keeps 3. Up to 4 remaining digits attach directly to the prefix, and
/// longer numbers split their last 4 digits into the final group, so
/// partial input stays progressively hyphenated while typing.
///
/// # Examples
///
/// ```
/// use pdesk_common::format::format_phone_number;
///
/// assert_eq!(format_phone_number("01012345678").as_deref(), Some("010-1234-5678"));
/// assert_eq!(format_phone_number("0212345678").as_deref(), Some("02-1234-5678"));
/// assert_eq!(format_phone_number("021234567").as_deref(), Some("02-123-4567"));
/// assert_eq!(format_phone_number("010123").as_deref(), Some("010-123"));
/// assert_eq!(format_phone_number(""), None);
/// ```
pub fn format_phone_number(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    let prefix_len = if digits.starts_with("02") { 2 } else { 3 };
    if digits.len() <= prefix_len {
        return Some(digits);
    }

    let (prefix, rest) = digits.split_at(prefix_len);
    if rest.len() <= 4 {
        return Some(format!("{prefix}-{rest}"));
    }

    let (middle, last) = rest.split_at(rest.len() - 4);
    Some(format!("{prefix}-{middle}-{last}"))
}

/// Render a timestamp as `YYYY-MM-DD`, shifted UTC→KST (+9 hours).
///
/// Accepts RFC 3339 (`2025-01-20T01:22:48.554Z`), naive datetimes with a
/// `T` or space separator, and bare dates. Unparseable input → `None`.
pub fn format_date(input: &str) -> Option<String> {
    let shifted = parse_datetime(input)? + Duration::hours(9);
    Some(shifted.format("%Y-%m-%d").to_string())
}

/// Render a timestamp as `YYYY-MM-DD {오전|오후} h:mm:ss`.
///
/// The date half goes through [`format_date`] (and so carries the +9 h
/// shift); the time half is rendered from the timestamp as parsed, on a
/// 12-hour clock with hour 0 shown as 12.
///
/// # Examples
///
/// ```
/// use pdesk_common::format::format_date_time;
///
/// assert_eq!(
///     format_date_time("2024-03-15 14:30:05").as_deref(),
///     Some("2024-03-15 오후 2:30:05")
/// );
/// assert_eq!(format_date_time("엉터리"), None);
/// ```
pub fn format_date_time(input: &str) -> Option<String> {
    let stamp = parse_datetime(input)?;
    let date = format_date(input)?;

    let meridiem = if stamp.hour() >= 12 { "오후" } else { "오전" };
    let hour = match stamp.hour() % 12 {
        0 => 12,
        h => h,
    };

    Some(format!(
        "{} {} {}:{:02}:{:02}",
        date,
        meridiem,
        hour,
        stamp.minute(),
        stamp.second()
    ))
}

/// Render a date-ish input as `YYYY-MM-DDT00:00:00`.
///
/// Always midnight, no timezone offset applied. Unparseable input →
/// `None`.
pub fn format_to_iso_datetime(input: &str) -> Option<String> {
    let stamp = parse_datetime(input)?;
    Some(date_to_iso_datetime(stamp.date()))
}

/// [`format_to_iso_datetime`] for an already-typed date
pub fn date_to_iso_datetime(date: NaiveDate) -> String {
    format!("{}T00:00:00", date.format("%Y-%m-%d"))
}

/// Format a 만원-unit amount with 억/만원 grouping.
///
/// `None` and `0` render as `"-"`.
///
/// # Examples
///
/// ```
/// use pdesk_common::format::format_price;
///
/// assert_eq!(format_price(Some(12345)), "1억 2345만원");
/// assert_eq!(format_price(Some(20000)), "2억");
/// assert_eq!(format_price(Some(5000)), "5000만원");
/// assert_eq!(format_price(Some(0)), "-");
/// assert_eq!(format_price(None), "-");
/// ```
pub fn format_price(price: Option<i64>) -> String {
    let Some(price) = price.filter(|p| *p != 0) else {
        return "-".to_string();
    };

    if price >= 10_000 {
        let uk = price / 10_000;
        let man = price % 10_000;

        let mut parts = Vec::new();
        if uk > 0 {
            parts.push(format!("{uk}억"));
        }
        if man > 0 {
            parts.push(format!("{man}만원"));
        }
        if parts.is_empty() {
            "-".to_string()
        } else {
            parts.join(" ")
        }
    } else {
        format!("{price}만원")
    }
}

/// Format an amount with thousands separators (`1000000` → `1,000,000`).
///
/// `None` and `0` render as `"-"`.
pub fn comma_price(price: Option<i64>) -> String {
    let Some(price) = price.filter(|p| *p != 0) else {
        return "-".to_string();
    };

    let digits = price.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if price < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Parse the timestamp shapes the backend and forms produce
fn parse_datetime(input: &str) -> Option<NaiveDateTime> {
    if let Ok(stamp) = chrono::DateTime::parse_from_rfc3339(input) {
        return Some(stamp.naive_utc());
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(input, fmt) {
            return Some(stamp);
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
