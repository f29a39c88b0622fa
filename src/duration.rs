//! Day-to-second conversion.

pub const SECONDS_PER_DAY: i64 = 86_400;

/// Convert a number of days to seconds.
///
/// `None` is treated as a single day. The fractional part of `days` is
/// dropped, not rounded: partial days do not count.
pub fn to_seconds(days: Option<f64>) -> i64 {
    let days = days.unwrap_or(1.0);
    days.trunc() as i64 * SECONDS_PER_DAY
}
