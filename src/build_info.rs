use chrono::DateTime;

/// RFC 3339 timestamp stamped by `build.rs`.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

/// `"October 2026"` style date for the footer.
pub fn format_build_date(raw: &str) -> Option<String> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.format("%B %Y").to_string())
}

pub fn last_updated() -> Option<String> {
    format_build_date(BUILD_TIME)
}
