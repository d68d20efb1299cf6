//! # Timestamps
//!
//! The backend actor measures time in nanoseconds since the Unix epoch
//! (signed 64-bit). These helpers convert between that representation,
//! milliseconds and calendar dates.

use chrono::{DateTime, NaiveDate, Utc};

/// Nanoseconds in one millisecond.
pub const NANOS_PER_MILLI: i64 = 1_000_000;

/// Nanoseconds in one day.
pub const NANOS_PER_DAY: i64 = 86_400 * 1_000 * NANOS_PER_MILLI;

/// Current wall-clock time in nanoseconds since the epoch.
///
/// Saturates at `i64::MAX` past the year 2262.
pub fn now_nanos() -> i64 {
    Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX)
}

/// Floors a nanosecond timestamp to whole milliseconds.
#[inline]
pub const fn nanos_to_millis(nanos: i64) -> i64 {
    nanos.div_euclid(NANOS_PER_MILLI)
}

/// Midnight UTC of `date`, in nanoseconds.
///
/// This is what the reminder form's date picker submits.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use smartassist_core::time::{nanos_from_date, NANOS_PER_DAY};
///
/// let day_two = NaiveDate::from_ymd_opt(1970, 1, 2).unwrap();
/// assert_eq!(nanos_from_date(day_two), NANOS_PER_DAY);
/// ```
pub fn nanos_from_date(date: NaiveDate) -> i64 {
    let days = date
        .signed_duration_since(DateTime::<Utc>::UNIX_EPOCH.date_naive())
        .num_days();
    days.saturating_mul(NANOS_PER_DAY)
}

/// The UTC date containing a nanosecond timestamp.
pub fn date_from_nanos(nanos: i64) -> NaiveDate {
    DateTime::<Utc>::from_timestamp_nanos(nanos).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nanos_to_millis_floors() {
        assert_eq!(nanos_to_millis(1_999_999), 1);
        assert_eq!(nanos_to_millis(-1), -1);
    }

    #[test]
    fn test_date_round_trip() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 20).unwrap();
        assert_eq!(date_from_nanos(nanos_from_date(date)), date);
        assert_eq!(date_from_nanos(nanos_from_date(date) + NANOS_PER_DAY - 1), date);
    }

    #[test]
    fn test_now_is_after_2020() {
        let y2020 = nanos_from_date(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        assert!(now_nanos() > y2020);
    }
}
