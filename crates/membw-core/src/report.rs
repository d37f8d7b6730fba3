//! Rendering measured durations for the runner's output contract.
//!
//! The runner emits exactly one line: the elapsed copy time as a
//! base-10 floating-point count of seconds. Sub-second precision is
//! preserved (fractional seconds, never rounded to whole seconds).

use std::time::Duration;

/// Render a duration as the runner's single output line.
///
/// `{}`-formats the fractional-second count, so the result always
/// parses back to the same finite, non-negative `f64`. The trailing
/// newline is the caller's (`println!`'s) responsibility.
pub fn seconds_line(elapsed: Duration) -> String {
    format!("{}", elapsed.as_secs_f64())
}
