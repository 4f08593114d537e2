//! Conversion of NMEA date and time fields to a UNIX timestamp.

use chrono::NaiveDate;

use crate::{
    Error,
    scan::{Date, Time},
};

/// Seconds and microseconds since `1970-01-01T00:00:00Z`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    pub seconds: i64,
    pub microseconds: u32,
}

/// Combines a `D` date and a `T` time into a UTC timestamp.
///
/// Two digit years are taken as `2000..=2099`. A leap second (`seconds ==
/// 60`) is counted as the first second of the next minute.
///
/// ```
/// use nmea_scan::{to_epoch, Date, Time, Timestamp};
///
/// let date = Date { day: 14, month: 2, year: 14 };
/// let time = Time { hours: 13, minutes: 0, seconds: 9, microseconds: 123_456 };
/// assert_eq!(
///     to_epoch(Some(date), Some(time)),
///     Ok(Timestamp { seconds: 1_392_382_809, microseconds: 123_456 })
/// );
/// assert!(to_epoch(None, Some(time)).is_err());
/// ```
pub fn to_epoch(date: Option<Date>, time: Option<Time>) -> Result<Timestamp, Error<'static>> {
    let (Some(date), Some(time)) = (date, time) else {
        return Err(Error::InvalidTimestamp);
    };
    if date.year > 99
        || !(1..=12).contains(&date.month)
        || !(1..=31).contains(&date.day)
        || time.hours > 23
        || time.minutes > 59
        || time.seconds > 60
        || time.microseconds >= 1_000_000
    {
        return Err(Error::InvalidTimestamp);
    }

    let minute = NaiveDate::from_ymd_opt(
        2000 + i32::from(date.year),
        u32::from(date.month),
        u32::from(date.day),
    )
    .and_then(|date| date.and_hms_opt(u32::from(time.hours), u32::from(time.minutes), 0))
    .ok_or(Error::InvalidTimestamp)?;

    Ok(Timestamp {
        seconds: minute.and_utc().timestamp() + i64::from(time.seconds),
        microseconds: time.microseconds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u8, month: u8, year: u8) -> Option<Date> {
        Some(Date { day, month, year })
    }

    fn time(hours: u8, minutes: u8, seconds: u8, microseconds: u32) -> Option<Time> {
        Some(Time {
            hours,
            minutes,
            seconds,
            microseconds,
        })
    }

    #[test]
    fn test_to_epoch() {
        assert_eq!(
            to_epoch(date(14, 2, 14), time(13, 0, 9, 123_456)),
            Ok(Timestamp {
                seconds: 1_392_382_809,
                microseconds: 123_456
            })
        );
        assert_eq!(
            to_epoch(date(1, 1, 0), time(0, 0, 0, 0)),
            Ok(Timestamp {
                seconds: 946_684_800,
                microseconds: 0
            })
        );
        assert_eq!(
            to_epoch(date(13, 9, 98), time(8, 18, 36, 750_000)),
            Ok(Timestamp {
                seconds: 4_061_434_716,
                microseconds: 750_000
            })
        );
    }

    #[test]
    fn test_to_epoch_leap_second() {
        let before = to_epoch(date(31, 12, 16), time(23, 59, 59, 0)).unwrap();
        let leap = to_epoch(date(31, 12, 16), time(23, 59, 60, 0)).unwrap();
        assert_eq!(leap.seconds, before.seconds + 1);
    }

    #[test]
    fn test_to_epoch_invalid() {
        assert_eq!(to_epoch(None, time(1, 2, 3, 0)), Err(Error::InvalidTimestamp));
        assert_eq!(to_epoch(date(1, 1, 1), None), Err(Error::InvalidTimestamp));
        for (d, t) in [
            (date(0, 1, 1), time(0, 0, 0, 0)),
            (date(32, 1, 1), time(0, 0, 0, 0)),
            (date(1, 0, 1), time(0, 0, 0, 0)),
            (date(1, 13, 1), time(0, 0, 0, 0)),
            (date(1, 1, 100), time(0, 0, 0, 0)),
            (date(31, 2, 14), time(0, 0, 0, 0)),
            (date(1, 1, 1), time(24, 0, 0, 0)),
            (date(1, 1, 1), time(0, 60, 0, 0)),
            (date(1, 1, 1), time(0, 0, 61, 0)),
            (date(1, 1, 1), time(0, 0, 0, 1_000_000)),
        ] {
            assert_eq!(to_epoch(d, t), Err(Error::InvalidTimestamp), "{:?} {:?}", d, t);
        }
    }
}
