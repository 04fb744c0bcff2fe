//! Display formatting helpers shared by the TUI tables and CLI output.

use chrono::{DateTime, Utc};

/// Truncate a string for a fixed-width table cell, appending "..." when cut.
/// Operates on characters, not bytes.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    // No room for an ellipsis at widths of 3 or less; hard-cut instead.
    if max_chars <= 3 {
        return text.chars().take(max_chars).collect();
    }

    let kept: String = text.chars().take(max_chars - 3).collect();
    format!("{}...", kept)
}

/// Compact date for table cells.
pub fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%b %d, %Y").to_string()
}

/// Full timestamp for detail views and CLI output.
pub fn format_datetime(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_truncate_short_string_untouched() {
        assert_eq!(truncate("https://a.io", 50), "https://a.io");
    }

    #[test]
    fn test_truncate_long_string() {
        let long = "https://example.com/very/long/path/segment/here";
        let cut = truncate(long, 20);
        assert_eq!(cut.chars().count(), 20, "got: {}", cut);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_truncate_multibyte_safe() {
        let text = "https://例え.jp/ページ/とても/長い/パス";
        let cut = truncate(text, 10);
        assert_eq!(cut.chars().count(), 10);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_truncate_tiny_width_never_exceeds() {
        assert_eq!(truncate("abcdef", 3), "abc");
        assert_eq!(truncate("abcdef", 2), "ab");
        assert_eq!(truncate("abcdef", 0), "");
    }

    #[test]
    fn test_date_formats() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap();
        assert_eq!(format_date(&ts), "Jan 01, 2024");
        assert_eq!(format_datetime(&ts), "2024-01-01 09:30 UTC");
    }
}
