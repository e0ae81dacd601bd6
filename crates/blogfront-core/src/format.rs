//! Text helpers shared by the widget renderers.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Text rendered for dates that cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Escape special HTML characters for text and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// First `limit` characters of `s`, never splitting a character.
pub fn truncate_chars(s: &str, limit: usize) -> &str {
    match s.char_indices().nth(limit) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// The excerpt when present and non-empty, otherwise the head of the content.
pub fn excerpt_or_content(excerpt: Option<&str>, content: &str, limit: usize) -> String {
    match excerpt.filter(|e| !e.is_empty()) {
        Some(excerpt) => excerpt.to_string(),
        None => truncate_chars(content, limit).to_string(),
    }
}

/// Format a publication date as `Month D, YYYY` (en-US, UTC).
///
/// Accepts RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS` timestamps and
/// plain `YYYY-MM-DD` dates. Anything else renders as [`INVALID_DATE`].
pub fn format_date(raw: &str) -> String {
    parse_date(raw)
        .map(|date| date.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
