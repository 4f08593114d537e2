use heapless::Vec;

use crate::{
    Error, SentenceType,
    scan::Scanner,
    sentences::{GnssType, scan_header},
};

/// One satellite of a GSV sentence.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SatelliteInfo {
    pub prn: i32,
    /// Degrees, 90 maximum
    pub elevation: Option<i32>,
    /// Degrees true, 0 to 359
    pub azimuth: Option<i32>,
    /// dB, 0 to 99, `None` when not tracking
    pub snr: Option<i32>,
}

/// GSV - Satellites in view
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsv_satellites_in_view>
///
/// ```text
///         1 2 3 4 5 6 7     n
///         | | | | | | |     |
///  $--GSV,x,x,x,x,x,x,x,...*hh<CR><LF>
/// ```
///
/// Up to four satellites per sentence, a full view is spread over
/// `total_messages` sentences.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GsvData {
    /// Constellation of the talker, `None` for `GN` and unknown talkers
    pub gnss_type: Option<GnssType>,
    pub total_messages: Option<i32>,
    pub message_number: Option<i32>,
    pub total_satellites: Option<i32>,
    /// Satellites with a PRN, in sentence order
    pub satellites: Vec<SatelliteInfo, 4>,
}

/// # Parse GSV message
///
/// Directives: `tiii;iiiiiiiiiiiiiiii`, a sentence may carry fewer than
/// four satellites.
///
/// ```
/// use nmea_scan::{parse_gsv, GnssType};
///
/// let gsv = parse_gsv("$GPGSV,3,3,11,22,42,067,42,24,14,311,43,27,05,244,00,,,,*4D").unwrap();
/// assert_eq!(gsv.gnss_type, Some(GnssType::Gps));
/// assert_eq!(gsv.satellites.len(), 3);
/// ```
pub fn parse_gsv(sentence: &str) -> Result<GsvData, Error<'_>> {
    let mut scanner = Scanner::new(sentence);
    let token = scan_header(&mut scanner, SentenceType::GSV)?;

    let total_messages = scanner.int()?;
    let message_number = scanner.int()?;
    let total_satellites = scanner.int()?;
    scanner.optional();

    let mut satellites: Vec<SatelliteInfo, 4> = Vec::new();
    for _ in 0..satellites.capacity() {
        let prn = scanner.int()?;
        let elevation = scanner.int()?;
        let azimuth = scanner.int()?;
        let snr = scanner.int()?;
        if let Some(prn) = prn {
            // one push per iteration, the vector never fills up
            let _ = satellites.push(SatelliteInfo {
                prn,
                elevation,
                azimuth,
                snr,
            });
        }
    }

    Ok(GsvData {
        gnss_type: GnssType::from_talker_id(token.get(..2).unwrap_or("")),
        total_messages,
        message_number,
        total_satellites,
        satellites,
    })
}
