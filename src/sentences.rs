//! All the supported sentence type data and parsers.

#[cfg(feature = "GGA")]
pub mod gga;
#[cfg(feature = "GLL")]
pub mod gll;
#[cfg(feature = "GSA")]
pub mod gsa;
#[cfg(feature = "GST")]
pub mod gst;
#[cfg(feature = "GSV")]
pub mod gsv;
#[cfg(feature = "RMC")]
pub mod rmc;
#[cfg(feature = "TXT")]
pub mod txt;
#[cfg(feature = "VTG")]
pub mod vtg;
#[cfg(feature = "ZDA")]
pub mod zda;

pub mod faa_mode;
pub mod fix_type;
pub mod gnss_type;

#[doc(inline)]
pub use {faa_mode::{FaaMode, parse_faa_mode}, fix_type::FixType, gnss_type::GnssType};

#[cfg(feature = "GGA")]
#[doc(inline)]
pub use gga::{GgaData, parse_gga};
#[cfg(feature = "GLL")]
#[doc(inline)]
pub use gll::{GllData, parse_gll};
#[cfg(feature = "GSA")]
#[doc(inline)]
pub use gsa::{GsaData, GsaFixType, GsaMode, parse_gsa};
#[cfg(feature = "GST")]
#[doc(inline)]
pub use gst::{GstData, parse_gst};
#[cfg(feature = "GSV")]
#[doc(inline)]
pub use gsv::{GsvData, SatelliteInfo, parse_gsv};
#[cfg(feature = "RMC")]
#[doc(inline)]
pub use rmc::{RmcData, parse_rmc};
#[cfg(feature = "TXT")]
#[doc(inline)]
pub use txt::{TxtData, parse_txt};
#[cfg(feature = "VTG")]
#[doc(inline)]
pub use vtg::{VtgData, parse_vtg};
#[cfg(feature = "ZDA")]
#[doc(inline)]
pub use zda::{ZdaData, parse_zda};

use crate::{Error, Fixed, SentenceType, scan::{Scanner, SentenceToken}};

/// Reads the `$ttsss` field and checks that it names `expected`.
#[cfg_attr(not(feature = "all-sentences"), allow(dead_code))]
pub(crate) fn scan_header<'a>(
    scanner: &mut Scanner<'a>,
    expected: SentenceType,
) -> Result<SentenceToken, Error<'a>> {
    let token = scanner.sentence_type()?;
    let found = SentenceType::from_message_id(token.get(2..).unwrap_or(""));
    if found != expected {
        return Err(Error::WrongSentenceHeader { expected, found });
    }
    Ok(token)
}

/// `f` followed by `d`, signed by the hemisphere.
#[cfg_attr(
    not(any(feature = "GGA", feature = "GLL", feature = "RMC")),
    allow(dead_code)
)]
pub(crate) fn scan_coordinate<'a>(scanner: &mut Scanner<'a>) -> Result<Option<Fixed>, Error<'a>> {
    let value = scanner.float()?;
    let direction = scanner.direction()?;
    Ok(value.map(|value| value.with_direction(direction)))
}
