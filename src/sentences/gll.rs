use crate::{
    Error, Fixed, SentenceType,
    scan::{Scanner, Time},
    sentences::{FaaMode, parse_faa_mode, scan_coordinate, scan_header},
};

/// GLL - Geographic Position - Latitude/Longitude
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gll_geographic_position_latitudelongitude>
///
/// ```text
///         1       2 3        4 5         6 7
///         |       | |        | |         | |
///  $--GLL,ddmm.mm,a,dddmm.mm,a,hhmmss.ss,a,m*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GllData {
    pub latitude: Option<Fixed>,
    pub longitude: Option<Fixed>,
    pub time: Option<Time>,
    /// Status `A`
    pub valid: bool,
    pub faa_mode: Option<FaaMode>,
}

/// # Parse GLL message
///
/// Directives: `tfdfdTc;c`
pub fn parse_gll(sentence: &str) -> Result<GllData, Error<'_>> {
    let mut scanner = Scanner::new(sentence);
    scan_header(&mut scanner, SentenceType::GLL)?;

    let latitude = scan_coordinate(&mut scanner)?;
    let longitude = scan_coordinate(&mut scanner)?;
    let time = scanner.time()?;
    let status = scanner.char()?;
    scanner.optional();
    let faa_mode = scanner.char()?.and_then(parse_faa_mode);

    Ok(GllData {
        latitude,
        longitude,
        time,
        valid: status == Some('A'),
        faa_mode,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_parse_gll() {
        let gll = parse_gll("$GPGLL,3723.2475,N,12158.3416,W,161229.487,A,A*41").unwrap();
        assert_eq!(
            gll,
            GllData {
                latitude: Some(Fixed::new(37232475, 10000)),
                longitude: Some(Fixed::new(-121583416, 10000)),
                time: Some(Time {
                    hours: 16,
                    minutes: 12,
                    seconds: 29,
                    microseconds: 487_000
                }),
                valid: true,
                faa_mode: Some(FaaMode::Autonomous),
            }
        );
    }

    #[test]
    fn test_parse_gll_precision() {
        let gll = parse_gll("$GPGLL,5107.0013414,N,11402.3279144,W,205412.00,A,A*73").unwrap();
        assert_eq!(gll.latitude, Some(Fixed::new(510700134, 100000)));
        assert_relative_eq!(
            gll.latitude.unwrap().to_coordinate(),
            51. + 7.00134 / 60.,
            epsilon = 1e-9
        );
        assert!(gll.longitude.unwrap().value < 0);
    }

    #[test]
    fn test_parse_gll_empty() {
        let gll = parse_gll("$GPGLL,,,,,,V,N*64").unwrap();
        assert_eq!(
            gll,
            GllData {
                latitude: None,
                longitude: None,
                time: None,
                valid: false,
                faa_mode: Some(FaaMode::DataNotValid),
            }
        );

        // NMEA 2.2 and earlier have no mode indicator
        let gll = parse_gll("$GPGLL,4916.45,N,12311.12,W,225444,A").unwrap();
        assert_eq!(gll.faa_mode, None);
        assert!(gll.valid);
    }
}
