//! Display helpers shared by the catalog pages

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Render a backend timestamp as e.g. "May 1, 2024".
///
/// Accepts RFC 3339 as well as the zone-less `timestamp` columns Postgres
/// returns, with or without fractional seconds.
pub fn format_date(timestamp: &str) -> Option<String> {
    let date = if let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) {
        parsed.date_naive()
    } else if let Ok(parsed) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
        parsed.date()
    } else {
        NaiveDate::parse_from_str(timestamp, "%Y-%m-%d").ok()?
    };
    Some(date.format("%B %-d, %Y").to_string())
}

/// "1 artist", "12 artists"
pub fn pluralize(count: u64, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// Avatar letter for entities without an image
pub fn initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}
