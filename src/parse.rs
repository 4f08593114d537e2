use core::str;

use nom::{
    IResult, Parser as _,
    bytes::complete::{take_while, take_while_m_n},
    character::complete::char,
    combinator::{all_consuming, map_res, opt},
    sequence::preceded,
};

use crate::{Error, SentenceType, scan::Scanner, sentences::*};

/// Longest sentence accepted by [`validate`], without the `*HH` checksum
/// and the line terminator.
///
/// NMEA 3.01, Section 5.3 limits a sentence to 82 characters including the
/// leading `$` and the terminating `\r\n`.
pub const SENTENCE_MAX_LEN: usize = 80;

/// XOR of all bytes, as used by the `*HH` suffix over everything between
/// `$` and `*`.
pub fn checksum<'a, I: Iterator<Item = &'a u8>>(bytes: I) -> u8 {
    bytes.fold(0, |c, x| c ^ *x)
}

#[inline]
fn is_body_char(c: char) -> bool {
    (' '..='~').contains(&c) && c != '$' && c != '*'
}

fn parse_checksum(i: &str) -> IResult<&str, u8> {
    preceded(
        char('*'),
        map_res(
            take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()),
            |hex| u8::from_str_radix(hex, 16),
        ),
    )
    .parse(i)
}

/// `$` body `[*HH]`, returns the body and the optional checksum.
fn parse_frame(i: &str) -> IResult<&str, (&str, Option<u8>)> {
    preceded(char('$'), (take_while(is_body_char), opt(parse_checksum))).parse(i)
}

/// Checks the framing, length, character set and (when present) the
/// checksum of a sentence.
///
/// A trailing `\n` or `\r\n` is ignored.
///
/// ```
/// use nmea_scan::{validate, Error};
///
/// assert!(validate("$GPTXT,01,01,02,ANTSTATUS=INIT*25").is_ok());
/// assert!(validate("$GPGLL,,,,,,V,N*64\r\n").is_ok());
/// assert_eq!(
///     validate("$GPTXT,01,01,02,ANTSTATUS=INIT*26"),
///     Err(Error::ChecksumMismatch { calculated: 0x25, found: 0x26 })
/// );
/// ```
pub fn validate(sentence: &str) -> Result<(), Error<'_>> {
    let frame = match sentence.strip_suffix('\n') {
        Some(line) => line.strip_suffix('\r').unwrap_or(line),
        None => sentence,
    };
    if frame.len() > SENTENCE_MAX_LEN + 3 {
        return Err(Error::SentenceLength(frame.len()));
    }
    if !frame.bytes().all(|b| (0x20..=0x7e).contains(&b)) {
        return Err(Error::ASCII);
    }

    let (_, (body, found)) = all_consuming(parse_frame).parse(frame)?;
    if let Some(found) = found {
        let calculated = checksum(body.as_bytes().iter());
        if calculated != found {
            return Err(Error::ChecksumMismatch { calculated, found });
        }
    }
    Ok(())
}

/// `true` when [`validate`] accepts the sentence.
///
/// ```
/// use nmea_scan::check;
///
/// assert!(check("$GPRMC,,V,,,,,,,,,,N*53"));
/// assert!(!check("$GPRMC,,V,,,,,,,,,,N*532"));
/// assert!(!check("gps: $GPGLL,,,,,,V,N"));
/// ```
#[inline]
pub fn check(sentence: &str) -> bool {
    validate(sentence).is_ok()
}

/// Kind of the sentence, from the last three characters of its `$ttsss`
/// token. Does not validate the rest of the sentence.
///
/// ```
/// use nmea_scan::{classify, SentenceType};
///
/// assert_eq!(classify("$GPRMC,81836,A"), SentenceType::RMC);
/// assert_eq!(classify("$GNGGA"), SentenceType::GGA);
/// assert_eq!(classify("$GPXXX,1,2"), SentenceType::Unknown);
/// assert_eq!(classify("$GPRM,1,2"), SentenceType::Unknown);
/// ```
pub fn classify(sentence: &str) -> SentenceType {
    Scanner::new(sentence)
        .sentence_type()
        .map_or(SentenceType::Unknown, |token| {
            SentenceType::from_message_id(token.get(2..).unwrap_or(""))
        })
}

/// Decoded sentence returned by [`parse_str`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum ParseResult {
    #[cfg(feature = "GGA")]
    GGA(GgaData),
    #[cfg(feature = "GLL")]
    GLL(GllData),
    #[cfg(feature = "GSA")]
    GSA(GsaData),
    #[cfg(feature = "GST")]
    GST(GstData),
    #[cfg(feature = "GSV")]
    GSV(GsvData),
    #[cfg(feature = "RMC")]
    RMC(RmcData),
    #[cfg(feature = "TXT")]
    TXT(TxtData),
    #[cfg(feature = "VTG")]
    VTG(VtgData),
    #[cfg(feature = "ZDA")]
    ZDA(ZdaData),
    /// A valid sentence of a known kind whose feature is disabled
    Unsupported(SentenceType),
}

impl ParseResult {
    /// Kind of the decoded sentence.
    pub fn sentence_type(&self) -> SentenceType {
        match self {
            #[cfg(feature = "GGA")]
            ParseResult::GGA(_) => SentenceType::GGA,
            #[cfg(feature = "GLL")]
            ParseResult::GLL(_) => SentenceType::GLL,
            #[cfg(feature = "GSA")]
            ParseResult::GSA(_) => SentenceType::GSA,
            #[cfg(feature = "GST")]
            ParseResult::GST(_) => SentenceType::GST,
            #[cfg(feature = "GSV")]
            ParseResult::GSV(_) => SentenceType::GSV,
            #[cfg(feature = "RMC")]
            ParseResult::RMC(_) => SentenceType::RMC,
            #[cfg(feature = "TXT")]
            ParseResult::TXT(_) => SentenceType::TXT,
            #[cfg(feature = "VTG")]
            ParseResult::VTG(_) => SentenceType::VTG,
            #[cfg(feature = "ZDA")]
            ParseResult::ZDA(_) => SentenceType::ZDA,
            ParseResult::Unsupported(sentence_type) => *sentence_type,
        }
    }
}

/// Same as [`parse_str`], for input that is not known to be UTF-8 yet.
pub fn parse_bytes(sentence: &[u8]) -> Result<ParseResult, Error<'_>> {
    if !sentence.is_ascii() {
        return Err(Error::ASCII);
    }
    let string = str::from_utf8(sentence).map_err(|_| Error::Utf8Decoding)?;
    parse_str(string)
}

/// Validates the sentence and decodes it with the parser of its kind.
///
/// A known kind whose feature is disabled is only validated and returned as
/// [`ParseResult::Unsupported`].
///
/// ```
/// use nmea_scan::{parse_str, Error, ParseResult};
///
/// match parse_str("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47") {
///     Ok(ParseResult::GGA(gga)) => assert_eq!(gga.satellites_tracked, Some(8)),
///     _ => unreachable!(),
/// }
/// assert_eq!(parse_str("$GPXXX,1"), Err(Error::Unknown("$GPXXX")));
/// ```
pub fn parse_str(sentence: &str) -> Result<ParseResult, Error<'_>> {
    validate(sentence)?;

    match classify(sentence) {
        SentenceType::GGA => {
            cfg_if::cfg_if! {
                if #[cfg(feature = "GGA")] {
                    parse_gga(sentence).map(ParseResult::GGA)
                } else {
                    Ok(ParseResult::Unsupported(SentenceType::GGA))
                }
            }
        }
        SentenceType::GLL => {
            cfg_if::cfg_if! {
                if #[cfg(feature = "GLL")] {
                    parse_gll(sentence).map(ParseResult::GLL)
                } else {
                    Ok(ParseResult::Unsupported(SentenceType::GLL))
                }
            }
        }
        SentenceType::GSA => {
            cfg_if::cfg_if! {
                if #[cfg(feature = "GSA")] {
                    parse_gsa(sentence).map(ParseResult::GSA)
                } else {
                    Ok(ParseResult::Unsupported(SentenceType::GSA))
                }
            }
        }
        SentenceType::GST => {
            cfg_if::cfg_if! {
                if #[cfg(feature = "GST")] {
                    parse_gst(sentence).map(ParseResult::GST)
                } else {
                    Ok(ParseResult::Unsupported(SentenceType::GST))
                }
            }
        }
        SentenceType::GSV => {
            cfg_if::cfg_if! {
                if #[cfg(feature = "GSV")] {
                    parse_gsv(sentence).map(ParseResult::GSV)
                } else {
                    Ok(ParseResult::Unsupported(SentenceType::GSV))
                }
            }
        }
        SentenceType::RMC => {
            cfg_if::cfg_if! {
                if #[cfg(feature = "RMC")] {
                    parse_rmc(sentence).map(ParseResult::RMC)
                } else {
                    Ok(ParseResult::Unsupported(SentenceType::RMC))
                }
            }
        }
        SentenceType::TXT => {
            cfg_if::cfg_if! {
                if #[cfg(feature = "TXT")] {
                    parse_txt(sentence).map(ParseResult::TXT)
                } else {
                    Ok(ParseResult::Unsupported(SentenceType::TXT))
                }
            }
        }
        SentenceType::VTG => {
            cfg_if::cfg_if! {
                if #[cfg(feature = "VTG")] {
                    parse_vtg(sentence).map(ParseResult::VTG)
                } else {
                    Ok(ParseResult::Unsupported(SentenceType::VTG))
                }
            }
        }
        SentenceType::ZDA => {
            cfg_if::cfg_if! {
                if #[cfg(feature = "ZDA")] {
                    parse_zda(sentence).map(ParseResult::ZDA)
                } else {
                    Ok(ParseResult::Unsupported(SentenceType::ZDA))
                }
            }
        }
        SentenceType::Unknown => Err(Error::Unknown(Scanner::new(sentence).field()?)),
    }
}
