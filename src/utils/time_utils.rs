use chrono::{DateTime, Local};

pub const CLOCK_FORMAT: &str = "%H:%M:%S";

/// Compact "how long" label, e.g. `45s`, `3m`, `2h`.
pub fn format_duration(ms: i64) -> String {
    let secs = ms / 1000;
    if secs < 60 {
        return format!("{}s", secs);
    }
    let mins = secs / 60;
    if mins < 60 {
        return format!("{}m", mins);
    }
    let hours = mins / 60;
    if hours < 24 {
        return format!("{}h", hours);
    }
    format!("{}d", hours / 24)
}

pub fn format_clock(dt: &DateTime<Local>) -> String {
    dt.format(CLOCK_FORMAT).to_string()
}
