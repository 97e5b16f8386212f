//! Schedulable hour domain and hour labels.

use crate::errors::ValidationError;

/// First hour a session may start at.
pub const HOUR_MIN: u8 = 6;
/// Last hour a session may end at.
pub const HOUR_MAX: u8 = 22;

/// Reject hours outside `HOUR_MIN..=HOUR_MAX`.
///
/// # Errors
///
/// Returns `ValidationError::HourOutOfRange` for hours outside the domain.
pub const fn check_hour(hour: u8) -> Result<u8, ValidationError> {
    if hour < HOUR_MIN || hour > HOUR_MAX {
        return Err(ValidationError::HourOutOfRange {
            hour,
            min: HOUR_MIN,
            max: HOUR_MAX,
        });
    }
    Ok(hour)
}

/// 12-hour clock label, e.g. `"9 AM"`, `"12 PM"`, `"10 PM"`.
#[must_use]
pub fn format_hour(hour: u8) -> String {
    let suffix = if hour >= 12 { "PM" } else { "AM" };
    let h12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{h12} {suffix}")
}

/// Label for a `[start, end)` block, e.g. `"9 AM - 11 AM"`.
#[must_use]
pub fn format_range(start: u8, end: u8) -> String {
    format!("{} - {}", format_hour(start), format_hour(end))
}
