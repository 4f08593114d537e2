use crate::{
    Error, Fixed, SentenceType,
    scan::{Scanner, Time},
    sentences::scan_header,
};

/// GST - GPS Pseudorange Noise Statistics
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gst_gps_pseudorange_noise_statistics>
///
/// ```text
///              1    2 3 4 5 6 7 8   9
///              |    | | | | | | |   |
/// $ --GST,hhmmss.ss,x,x,x,x,x,x,x*hh<CR><LF>
/// ```
///
/// Deviations are in meters, the orientation in degrees from true north.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GstData {
    pub time: Option<Time>,
    /// RMS value of the standard deviation of the range inputs
    pub rms_deviation: Option<Fixed>,
    pub semi_major_deviation: Option<Fixed>,
    pub semi_minor_deviation: Option<Fixed>,
    pub semi_major_orientation: Option<Fixed>,
    pub latitude_error_deviation: Option<Fixed>,
    pub longitude_error_deviation: Option<Fixed>,
    pub altitude_error_deviation: Option<Fixed>,
}

/// # Parse GST message
///
/// Directives: `tTfffffff`
pub fn parse_gst(sentence: &str) -> Result<GstData, Error<'_>> {
    let mut scanner = Scanner::new(sentence);
    scan_header(&mut scanner, SentenceType::GST)?;

    Ok(GstData {
        time: scanner.time()?,
        rms_deviation: scanner.float()?,
        semi_major_deviation: scanner.float()?,
        semi_minor_deviation: scanner.float()?,
        semi_major_orientation: scanner.float()?,
        latitude_error_deviation: scanner.float()?,
        longitude_error_deviation: scanner.float()?,
        altitude_error_deviation: scanner.float()?,
    })
}
