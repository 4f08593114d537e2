use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};

use crate::{
    Error, SentenceType,
    scan::{Scanner, Time},
    sentences::scan_header,
};

/// ZDA - Time & Date - UTC, day, month, year and local time zone
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_zda_time_date_utc_day_month_year_and_local_time_zone>
///
/// ```text
///        1         2  3  4    5  6  7
///        |         |  |  |    |  |  |
/// $--ZDA,hhmmss.ss,xx,xx,xxxx,xx,xx*hh<CR><LF>
/// ```
///
/// 1. UTC time (hours, minutes, seconds, may have fractional subseconds)
/// 2. Day, 01 to 31
/// 3. Month, 01 to 12
/// 4. Year (4 digits)
/// 5. Local zone description, 00 to +- 13 hours
/// 6. Local zone minutes description, 00 to 59, apply same sign as local hours
/// 7. Checksum
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZdaData {
    pub time: Option<Time>,
    pub day: Option<i32>,
    pub month: Option<i32>,
    pub year: Option<i32>,
    pub hour_offset: Option<i32>,
    pub minute_offset: Option<i32>,
}

impl ZdaData {
    /// Get UTC date by `day`, `month` and `year` fields.
    /// Returns `None` if any field is `None` or out of range.
    pub fn utc_date(&self) -> Option<NaiveDate> {
        let ((day, month), year) = self.day.zip(self.month).zip(self.year)?;
        NaiveDate::from_ymd_opt(year, u32::try_from(month).ok()?, u32::try_from(day).ok()?)
    }

    /// Get UTC date time by `time`, `day`, `month`, and `year` fields.
    /// Returns `None` if any field is `None`.
    ///
    /// A leap second (`seconds == 60`) uses chrono's encoding: second `59`
    /// with the microseconds carried past `1_000_000`.
    pub fn utc_date_time(&self) -> Option<NaiveDateTime> {
        let time = self.time?;
        let (seconds, microseconds) = if time.seconds == 60 {
            (59, time.microseconds.checked_add(1_000_000)?)
        } else {
            (u32::from(time.seconds), time.microseconds)
        };
        let time = NaiveTime::from_hms_micro_opt(
            u32::from(time.hours),
            u32::from(time.minutes),
            seconds,
            microseconds,
        )?;
        self.utc_date().map(|date| NaiveDateTime::new(date, time))
    }

    /// Get `chrono::FixedOffset` by `hour_offset` and `minute_offset` fields.
    /// Return `Some` if either `hour_offset` or `minute_offset` is `Some`.
    pub fn offset(&self) -> Option<FixedOffset> {
        if self.hour_offset.is_none() && self.minute_offset.is_none() {
            return None;
        }
        let hours = self.hour_offset.unwrap_or(0);
        let minutes = self.minute_offset.unwrap_or(0);
        let minutes = if hours < 0 {
            -minutes.checked_abs()?
        } else {
            minutes
        };
        let seconds = hours.checked_mul(60)?.checked_add(minutes)?.checked_mul(60)?;
        FixedOffset::east_opt(seconds)
    }

    /// Caluculate local datetime
    /// Returns `None` if any field is `None`.
    pub fn local_date_time(&self) -> Option<DateTime<FixedOffset>> {
        let offset = self.offset()?;
        Some(self.utc_date_time()?.and_utc().with_timezone(&offset))
    }
}

/// # Parse ZDA message
///
/// Directives: `tTiiiii`
///
/// ```
/// use nmea_scan::parse_zda;
///
/// let zda = parse_zda("$GPZDA,160012.71,11,03,2004,-1,00*7D").unwrap();
/// assert_eq!(zda.year, Some(2004));
/// assert_eq!(zda.hour_offset, Some(-1));
/// ```
pub fn parse_zda(sentence: &str) -> Result<ZdaData, Error<'_>> {
    let mut scanner = Scanner::new(sentence);
    scan_header(&mut scanner, SentenceType::ZDA)?;

    Ok(ZdaData {
        time: scanner.time()?,
        day: scanner.int()?,
        month: scanner.int()?,
        year: scanner.int()?,
        hour_offset: scanner.int()?,
        minute_offset: scanner.int()?,
    })
}
