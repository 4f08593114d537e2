use arrayvec::ArrayString;

use crate::{
    Error, SentenceType,
    scan::{MAX_FIELD_LEN, Scanner},
    sentences::scan_header,
};

/// TXT - Text message
///
/// ```text
///         1  2  3  4
///         |  |  |  |
///  $--TXT,xx,xx,xx,c--c*hh<CR><LF>
/// ```
///
/// 1. Total number of sentences of the message
/// 2. Sentence number
/// 3. Text identifier
/// 4. Text
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxtData {
    pub total: Option<i32>,
    pub number: Option<i32>,
    pub identifier: Option<i32>,
    #[cfg_attr(feature = "defmt", defmt(Debug2Format))]
    pub text: ArrayString<MAX_FIELD_LEN>,
}

/// # Parse TXT message
///
/// Directives: `tiiis`
///
/// ```
/// use nmea_scan::parse_txt;
///
/// let txt = parse_txt("$GNTXT,01,01,02,u-blox AG - www.u-blox.com*4E").unwrap();
/// assert_eq!(txt.text.as_str(), "u-blox AG - www.u-blox.com");
/// ```
pub fn parse_txt(sentence: &str) -> Result<TxtData, Error<'_>> {
    let mut scanner = Scanner::new(sentence);
    scan_header(&mut scanner, SentenceType::TXT)?;

    Ok(TxtData {
        total: scanner.int()?,
        number: scanner.int()?,
        identifier: scanner.int()?,
        text: scanner.string()?,
    })
}
