use core::fmt;

use crate::SentenceType;

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq)]
pub enum Error<'a> {
    /// The provided input was not a proper UTF-8 string
    Utf8Decoding,
    /// The provided string message contains other apart from printable ASCII.
    ASCII,
    /// The checksum of the sentence was corrupt or wrong
    ChecksumMismatch { calculated: u8, found: u8 },
    /// For some reason a sentence was passed to the wrong sentence specific parser, this error
    /// should never happen when using [`crate::parse_str`].
    WrongSentenceHeader {
        expected: SentenceType,
        found: SentenceType,
    },
    /// The sentence could not be parsed because its format was invalid.
    ParsingError(
        #[cfg_attr(feature = "defmt", defmt(Debug2Format))] nom::Err<nom::error::Error<&'a str>>,
    ),
    /// The sentence was too long to be parsed, our current limit is `SENTENCE_MAX_LEN` characters.
    SentenceLength(usize),
    /// Parameter was too long to fit into fixed ArrayString.
    ParameterLength {
        max_length: usize,
        parameter_length: usize,
    },
    /// The sentence ran out of fields before every requested field was read.
    MissingField,
    /// A directive string contained a character that is not a known directive.
    UnknownDirective(char),
    /// The sentence type is unknown for this crate.
    Unknown(&'a str),
    /// The date or time is absent or out of range and can't be turned into a timestamp.
    InvalidTimestamp,
}

impl<'a> From<nom::Err<nom::error::Error<&'a str>>> for Error<'a> {
    fn from(error: nom::Err<nom::error::Error<&'a str>>) -> Self {
        Self::ParsingError(error)
    }
}

impl fmt::Display for Error<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Utf8Decoding => {
                write!(f, "The provided input was not a valid UTF-8 string")
            }
            Error::ASCII => write!(f, "Provided input includes non-printable or non-ASCII characters"),
            Error::ChecksumMismatch { calculated, found } => write!(
                f,
                "Checksum Mismatch(calculated = {:02X}, found = {:02X})",
                calculated, found
            ),
            Error::WrongSentenceHeader { expected, found } => write!(
                f,
                "Wrong Sentence Header (expected = '{}', found = '{}')",
                expected, found
            ),
            Error::ParsingError(e) => write!(f, "Parse error: {}", e),
            Error::SentenceLength(size) => write!(
                f,
                "The sentence was too long to be parsed ({} characters), current limit is {} characters",
                size,
                crate::SENTENCE_MAX_LEN
            ),
            Error::ParameterLength {
                max_length,
                parameter_length,
            } => write!(
                f,
                "Parameter of {} characters was too long to fit into string, max length is {}",
                parameter_length, max_length
            ),
            Error::MissingField => write!(f, "The sentence has fewer fields than expected"),
            Error::UnknownDirective(directive) => {
                write!(f, "Unknown scan directive '{}'", directive)
            }
            Error::Unknown(sentence) => {
                write!(f, "Unknown for the crate NMEA sentence '{}'", sentence)
            }
            Error::InvalidTimestamp => {
                write!(f, "Date and time are absent or out of range")
            }
        }
    }
}

impl core::error::Error for Error<'_> {}
