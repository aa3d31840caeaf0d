//! Shared utility functions

use chrono::{DateTime, Utc};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Describe a Unix timestamp relative to `now` ("3 minutes ago", "in 2 days")
pub fn timestamp_to_time_ago(timestamp: i64, now: DateTime<Utc>) -> String {
    // Feed timestamps are untrusted; clamp instead of overflowing
    let delta = now.timestamp().saturating_sub(timestamp);
    let seconds = delta.unsigned_abs();

    if seconds < 10 {
        return "just now".to_string();
    }

    let (count, unit) = match seconds {
        s if s < 60 => (s, "second"),
        s if s < 3_600 => (s / 60, "minute"),
        s if s < 86_400 => (s / 3_600, "hour"),
        s if s < 7 * 86_400 => (s / 86_400, "day"),
        s if s < 30 * 86_400 => (s / (7 * 86_400), "week"),
        s if s < 365 * 86_400 => (s / (30 * 86_400), "month"),
        s => (s / (365 * 86_400), "year"),
    };
    let plural = if count == 1 { "" } else { "s" };

    if delta >= 0 {
        format!("{} {}{} ago", count, unit, plural)
    } else {
        format!("in {} {}{}", count, unit, plural)
    }
}

/// Percent-encode one URL path segment (RFC 3986 unreserved bytes pass through)
pub fn encode_path_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Truncate to at most `max_width` display columns, appending `…` when cut.
///
/// Uses display width rather than byte length so CJK and emoji line up.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target = max_width - 1;
    let mut width = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > target {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2021, 4, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_time_ago_units() {
        let t = now().timestamp();
        assert_eq!(timestamp_to_time_ago(t, now()), "just now");
        assert_eq!(timestamp_to_time_ago(t - 45, now()), "45 seconds ago");
        assert_eq!(timestamp_to_time_ago(t - 60, now()), "1 minute ago");
        assert_eq!(timestamp_to_time_ago(t - 3 * 3_600, now()), "3 hours ago");
        assert_eq!(timestamp_to_time_ago(t - 86_400, now()), "1 day ago");
        assert_eq!(timestamp_to_time_ago(t - 14 * 86_400, now()), "2 weeks ago");
        assert_eq!(timestamp_to_time_ago(t - 90 * 86_400, now()), "3 months ago");
        assert_eq!(timestamp_to_time_ago(t - 800 * 86_400, now()), "2 years ago");
    }

    #[test]
    fn test_time_ago_future() {
        let t = now().timestamp();
        assert_eq!(timestamp_to_time_ago(t + 2 * 86_400, now()), "in 2 days");
    }

    #[test]
    fn test_time_ago_extreme_timestamps() {
        let past = timestamp_to_time_ago(i64::MIN, now());
        assert!(past.ends_with("years ago"), "{}", past);

        let future = timestamp_to_time_ago(i64::MAX, now());
        assert!(future.starts_with("in "), "{}", future);
        assert!(future.ends_with("years"), "{}", future);
    }

    #[test]
    fn test_encode_path_segment() {
        assert_eq!(encode_path_segment("iliekcomputers"), "iliekcomputers");
        assert_eq!(encode_path_segment("a b/c"), "a%20b%2Fc");
        assert_eq!(encode_path_segment("björk"), "bj%C3%B6rk");
        assert_eq!(encode_path_segment("x_y-z.~"), "x_y-z.~");
    }

    #[test]
    fn test_truncate_shorter_than_max() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each of these takes two columns
        assert_eq!(truncate_to_width("日本語", 4), "日…");
    }

    #[test]
    fn test_truncate_to_zero() {
        assert_eq!(truncate_to_width("hello", 0), "");
    }
}
