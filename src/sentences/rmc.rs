use crate::{
    Error, Fixed, SentenceType,
    scan::{Date, Scanner, Time},
    sentences::{FaaMode, parse_faa_mode, scan_coordinate, scan_header},
};

/// RMC - Recommended Minimum Navigation Information
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
///
/// ```text
///         1         2 3       4 5        6  7   8   9    10 11
///         |         | |       | |        |  |   |   |    |  |
///  $--RMC,hhmmss.ss,A,ddmm.mm,a,dddmm.mm,a,x.x,x.x,xxxx,x.x,a*hh<CR><LF>
/// ```
///
/// NMEA 2.3 adds an FAA mode indicator (12) before the checksum.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RmcData {
    pub time: Option<Time>,
    /// Status `A`, anything else means the position is not valid.
    pub valid: bool,
    /// `ddmm.mm`, negative in the southern hemisphere
    pub latitude: Option<Fixed>,
    /// `dddmm.mm`, negative in the western hemisphere
    pub longitude: Option<Fixed>,
    /// Speed over ground in knots
    pub speed: Option<Fixed>,
    /// Track made good, degrees true
    pub course: Option<Fixed>,
    pub date: Option<Date>,
    /// Magnetic variation in degrees, negative to the west
    pub variation: Option<Fixed>,
    pub faa_mode: Option<FaaMode>,
}

/// # Parse RMC message
///
/// Directives: `tTcfdfdffDfd;c`
///
/// ```
/// use nmea_scan::{parse_rmc, Fixed};
///
/// let rmc = parse_rmc("$GPRMC,225446.33,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E,A*2B").unwrap();
/// assert!(rmc.valid);
/// assert_eq!(rmc.longitude, Some(Fixed::new(-1231112, 100)));
/// ```
pub fn parse_rmc(sentence: &str) -> Result<RmcData, Error<'_>> {
    let mut scanner = Scanner::new(sentence);
    scan_header(&mut scanner, SentenceType::RMC)?;

    let time = scanner.time()?;
    let status = scanner.char()?;
    let latitude = scan_coordinate(&mut scanner)?;
    let longitude = scan_coordinate(&mut scanner)?;
    let speed = scanner.float()?;
    let course = scanner.float()?;
    let date = scanner.date()?;
    let variation = scan_coordinate(&mut scanner)?;
    scanner.optional();
    let faa_mode = scanner.char()?.and_then(parse_faa_mode);

    Ok(RmcData {
        time,
        valid: status == Some('A'),
        latitude,
        longitude,
        speed,
        course,
        date,
        variation,
        faa_mode,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Value, scan, to_epoch};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_rmc_full() {
        let rmc = parse_rmc(
            "$GPRMC,081836.75,A,3751.65,S,14507.36,E,000.0,360.0,130998,011.3,E",
        )
        .unwrap();
        assert_eq!(
            rmc,
            RmcData {
                time: Some(Time {
                    hours: 8,
                    minutes: 18,
                    seconds: 36,
                    microseconds: 750_000
                }),
                valid: true,
                latitude: Some(Fixed::new(-375165, 100)),
                longitude: Some(Fixed::new(1450736, 100)),
                speed: Some(Fixed::new(0, 10)),
                course: Some(Fixed::new(3600, 10)),
                date: Some(Date {
                    day: 13,
                    month: 9,
                    year: 98
                }),
                variation: Some(Fixed::new(113, 10)),
                faa_mode: None,
            }
        );
    }

    #[test]
    fn test_parse_rmc_sparse() {
        let rmc = parse_rmc("$GPRMC,,A,3751.65,N,14507.36,W,,,,,").unwrap();
        assert_eq!(
            rmc,
            RmcData {
                time: None,
                valid: true,
                latitude: Some(Fixed::new(375165, 100)),
                longitude: Some(Fixed::new(-1450736, 100)),
                speed: None,
                course: None,
                date: None,
                variation: None,
                faa_mode: None,
            }
        );
        assert!(to_epoch(rmc.date, rmc.time).is_err());

        let rmc = parse_rmc("$GPRMC,,V,,,,,,,,,,N*53").unwrap();
        assert!(!rmc.valid);
        assert_eq!(rmc.latitude, None);
        assert_eq!(rmc.faa_mode, Some(FaaMode::DataNotValid));
    }

    #[test]
    fn test_parse_rmc_faa_mode() {
        let rmc = parse_rmc(
            "$GPRMC,225446.33,A,4916.45,N,12311.12,W,000.5,054.7,191194,020.3,E,A*2B",
        )
        .unwrap();
        assert_eq!(rmc.faa_mode, Some(FaaMode::Autonomous));
        assert_eq!(rmc.speed, Some(Fixed::new(5, 10)));
        assert_eq!(rmc.variation, Some(Fixed::new(203, 10)));
        assert_eq!(
            to_epoch(rmc.date, rmc.time).unwrap().seconds,
            3_941_045_686
        );
    }

    #[test]
    fn test_parse_rmc_errors() {
        assert_eq!(
            parse_rmc("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47"),
            Err(Error::WrongSentenceHeader {
                expected: SentenceType::RMC,
                found: SentenceType::GGA
            })
        );
        assert_eq!(parse_rmc("$GPRMC,081836,A,3751.65,S"), Err(Error::MissingField));
        assert!(parse_rmc("$GPRMC,081836,A,3751.65,Q,14507.36,E,,,,,").is_err());
        assert!(parse_rmc("$GPRMC,081836,A,37x1.65,S,14507.36,E,,,,,").is_err());
    }

    #[test]
    fn test_parse_rmc_matches_scan() {
        let sentence = "$GPRMC,081836,A,3751.65,S,14507.36,E,000.0,360.0,130998,011.3,E*62";
        let rmc = parse_rmc(sentence).unwrap();
        let values = scan(sentence, "tTcfdfdffDfd;c").unwrap();
        assert_eq!(values[1], Value::Time(rmc.time));
        assert_eq!(values[2], Value::Char(Some('A')));
        assert_eq!(values[9], Value::Date(rmc.date));
        assert_eq!(values[12], Value::Char(None));
        assert_eq!(values.len(), 13);
    }
}
