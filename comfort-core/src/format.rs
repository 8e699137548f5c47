//! Display strings for the dashboard.

use anyhow::{Result, anyhow};
use chrono::{DateTime, TimeZone, Utc};

/// Shown in place of a calm-period time when no window was found.
pub const CALM_PERIOD_NONE: &str = "--";

const CLOCK_FORMAT: &str = "%-I:%M%P";

/// Formats `dt` shifted by `timezone_offset` as `H:MMam/pm`, reading the
/// shifted instant as UTC.
pub fn format_local_clock(dt: i64, timezone_offset: i64) -> Result<String> {
    let shifted = DateTime::<Utc>::from_timestamp(dt + timezone_offset, 0)
        .ok_or_else(|| anyhow!("Timestamp {dt} with offset {timezone_offset} is out of range"))?;
    Ok(shifted.format(CLOCK_FORMAT).to_string())
}

/// Formats an instant as `H:MMam/pm` in the given timezone.
pub fn format_in_timezone<Tz: TimeZone>(instant: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    instant.with_timezone(tz).format(CLOCK_FORMAT).to_string()
}
