//! Presentation helpers for report fields.

use chrono::DateTime;
use chrono_tz::Tz;

/// Render a POSIX timestamp as a 12-hour clock time, e.g. `"3:45 PM"`.
///
/// Returns `None` if the timestamp is outside chrono's representable range.
pub fn clock_time(epoch_secs: i64, tz: Tz) -> Option<String> {
    let utc = DateTime::from_timestamp(epoch_secs, 0)?;
    Some(utc.with_timezone(&tz).format("%-I:%M %p").to_string())
}
