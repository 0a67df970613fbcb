use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Age of a repository's last update, e.g. "5h ago".
pub fn relative_time(dt: &DateTime<Utc>) -> String {
    relative_time_since(dt, Utc::now())
}

/// Like [`relative_time`], measured against `now`. Future timestamps read as
/// "just now".
pub fn relative_time_since(dt: &DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = now.signed_duration_since(dt).num_seconds();
    let (amount, unit) = match secs {
        s if s < MINUTE => return "just now".to_string(),
        s if s < HOUR => (s / MINUTE, "m"),
        s if s < DAY => (s / HOUR, "h"),
        s if s < MONTH => (s / DAY, "d"),
        s if s < YEAR => (s / MONTH, "mo"),
        s => (s / YEAR, "y"),
    };
    format!("{}{} ago", amount, unit)
}
