//! Turning a local birth date and time into a UTC moment.
//!
//! Which offset applies at a place and date is decided elsewhere; this only
//! applies the offset it is given.

use crate::error::CalculationError;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};

/// Largest UTC offset accepted, in minutes (±18h).
pub const MAX_UTC_OFFSET_MINUTES: i32 = 18 * 60;

/// Parse `YYYY-MM-DD` plus `HH:MM[:SS]` local wall-clock time at a fixed UTC
/// offset (minutes east of Greenwich) into a UTC moment.
pub fn parse_birth_moment(
    date: &str,
    time: &str,
    utc_offset_minutes: i32,
) -> Result<DateTime<Utc>, CalculationError> {
    let day = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|e| {
        CalculationError::InvalidInput(format!("birth date {:?}: {}", date, e))
    })?;

    let time_str = time.trim();
    let clock = NaiveTime::parse_from_str(time_str, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time_str, "%H:%M"))
        .map_err(|e| CalculationError::InvalidInput(format!("birth time {:?}: {}", time, e)))?;

    if utc_offset_minutes.abs() > MAX_UTC_OFFSET_MINUTES {
        return Err(CalculationError::InvalidInput(format!(
            "utc offset of {} minutes is beyond ±18h",
            utc_offset_minutes
        )));
    }
    let offset = FixedOffset::east_opt(utc_offset_minutes * 60).ok_or_else(|| {
        CalculationError::InvalidInput(format!("utc offset {} minutes", utc_offset_minutes))
    })?;

    offset
        .from_local_datetime(&day.and_time(clock))
        .single()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| {
            CalculationError::InvalidInput(format!("no single instant for {} {}", date, time))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utc_passthrough() {
        let moment = parse_birth_moment("1990-07-15", "14:30", 0).unwrap();
        assert_eq!(moment, Utc.with_ymd_and_hms(1990, 7, 15, 14, 30, 0).unwrap());
    }

    #[test]
    fn test_east_offset_moves_earlier() {
        // 08:15 in UTC+2 is 06:15 UTC
        let moment = parse_birth_moment("1985-01-02", "08:15:00", 120).unwrap();
        assert_eq!(moment, Utc.with_ymd_and_hms(1985, 1, 2, 6, 15, 0).unwrap());
    }

    #[test]
    fn test_west_offset_crosses_midnight() {
        // 22:00 in UTC-5 is 03:00 UTC the next day
        let moment = parse_birth_moment("2000-12-31", "22:00", -300).unwrap();
        assert_eq!(moment, Utc.with_ymd_and_hms(2001, 1, 1, 3, 0, 0).unwrap());
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(matches!(
            parse_birth_moment("15/07/1990", "14:30", 0),
            Err(CalculationError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_birth_moment("1990-07-15", "2pm", 0),
            Err(CalculationError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_birth_moment("1990-02-30", "10:00", 0),
            Err(CalculationError::InvalidInput(_))
        ));
        assert!(matches!(
            parse_birth_moment("1990-07-15", "14:30", 19 * 60),
            Err(CalculationError::InvalidInput(_))
        ));
    }
}
