use crate::{
    Error, Fixed, SentenceType,
    scan::Scanner,
    sentences::{FaaMode, parse_faa_mode, scan_header},
};

/// VTG - Track made good and Ground speed
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vtg_track_made_good_and_ground_speed>
///
/// ```text
///          1  2  3  4  5  6  7  8 9
///          |  |  |  |  |  |  |  | |
///  $--VTG,x.x,T,x.x,M,x.x,N,x.x,K,m*hh<CR><LF>
/// ```
///
/// The unit letters (`T`, `M`, `N`, `K`) are read but not checked.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VtgData {
    /// Course over ground, degrees true
    pub true_track: Option<Fixed>,
    /// Course over ground, degrees magnetic
    pub magnetic_track: Option<Fixed>,
    pub speed_knots: Option<Fixed>,
    pub speed_kph: Option<Fixed>,
    pub faa_mode: Option<FaaMode>,
}

/// # Parse VTG message
///
/// Directives: `tfcfcfcfc;c`
pub fn parse_vtg(sentence: &str) -> Result<VtgData, Error<'_>> {
    let mut scanner = Scanner::new(sentence);
    scan_header(&mut scanner, SentenceType::VTG)?;

    let true_track = scanner.float()?;
    scanner.char()?;
    let magnetic_track = scanner.float()?;
    scanner.char()?;
    let speed_knots = scanner.float()?;
    scanner.char()?;
    let speed_kph = scanner.float()?;
    scanner.char()?;
    scanner.optional();
    let faa_mode = scanner.char()?.and_then(parse_faa_mode);

    Ok(VtgData {
        true_track,
        magnetic_track,
        speed_knots,
        speed_kph,
        faa_mode,
    })
}
