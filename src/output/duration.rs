//! Duration formatting for summary lines

use std::time::Duration;

const MINUTE: Duration = Duration::from_secs(60);

/// Format a duration for the summary parenthetical
///
/// Under a minute: truncated to tenths, `0.1s`. From a minute up: whole
/// minutes and the truncated remaining seconds, `2m5s`.
pub fn format_duration(duration: Duration) -> String {
    if duration < MINUTE {
        let tenths = duration.as_millis() / 100;
        format!("{}.{}s", tenths / 10, tenths % 10)
    } else {
        let secs = duration.as_secs();
        format!("{}m{}s", secs / 60, secs % 60)
    }
}
