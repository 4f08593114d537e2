use crate::{
    Error, Fixed, SentenceType,
    scan::{Scanner, Time},
    sentences::{FixType, scan_coordinate, scan_header},
};

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// ```text
///                                                       11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14   15
///         |         |       | |        | | |  |   |   | |   | |   |    |
///  $--GGA,hhmmss.ss,ddmm.mm,a,ddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GgaData {
    pub time: Option<Time>,
    pub latitude: Option<Fixed>,
    pub longitude: Option<Fixed>,
    /// 0 = invalid, 1 = GPS, 2 = DGPS, ... see [`FixType`]
    pub fix_quality: Option<i32>,
    pub satellites_tracked: Option<i32>,
    pub hdop: Option<Fixed>,
    /// Antenna altitude above mean sea level
    pub altitude: Option<Fixed>,
    pub altitude_units: Option<char>,
    /// Height of geoid (mean sea level) above WGS84 ellipsoid
    pub height: Option<Fixed>,
    pub height_units: Option<char>,
    /// Seconds since the last DGPS update
    pub dgps_age: Option<Fixed>,
}

impl GgaData {
    pub fn fix_type(&self) -> Option<FixType> {
        self.fix_quality.map(FixType::from)
    }
}

/// # Parse GGA message
///
/// Directives: `tTfdfdiiffcfcf_`, the DGPS station id is skipped.
///
/// From gpsd/driver_nmea0183.c
///
/// `GGA,123519,4807.038,N,01131.324,E,1,08,0.9,545.4,M,46.9,M, , *42`
/// 1     123519       Fix taken at 12:35:19 UTC
/// 2,3   4807.038,N   Latitude 48 deg 07.038' N
/// 4,5   01131.324,E  Longitude 11 deg 31.324' E
/// 6         1            Fix quality: 0 = invalid, 1 = GPS, 2 = DGPS,
/// 3=PPS (Precise Position Service),
/// 4=RTK (Real Time Kinematic) with fixed integers,
/// 5=Float RTK, 6=Estimated, 7=Manual, 8=Simulator
/// 7     08       Number of satellites being tracked
/// 8     0.9              Horizontal dilution of position
/// 9,10  545.4,M      Altitude, Metres above mean sea level
/// 11,12 46.9,M       Height of geoid (mean sea level) above WGS84
/// ellipsoid, in Meters
/// (empty field) time in seconds since last DGPS update
/// (empty field) DGPS station ID number (0000-1023)
pub fn parse_gga(sentence: &str) -> Result<GgaData, Error<'_>> {
    let mut scanner = Scanner::new(sentence);
    scan_header(&mut scanner, SentenceType::GGA)?;

    let data = GgaData {
        time: scanner.time()?,
        latitude: scan_coordinate(&mut scanner)?,
        longitude: scan_coordinate(&mut scanner)?,
        fix_quality: scanner.int()?,
        satellites_tracked: scanner.int()?,
        hdop: scanner.float()?,
        altitude: scanner.float()?,
        altitude_units: scanner.char()?,
        height: scanner.float()?,
        height_units: scanner.char()?,
        dgps_age: scanner.float()?,
    };
    scanner.skip()?;

    Ok(data)
}
