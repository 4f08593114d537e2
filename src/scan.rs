//! Field scanner shared by all sentence decoders.
//!
//! A sentence is a list of comma separated fields. Each field is read by one
//! *directive*, a small typed parser:
//!
//! | directive | [`Scanner`] method | output |
//! |-----------|--------------------|--------|
//! | `c` | [`Scanner::char`] | `Option<char>` |
//! | `d` | [`Scanner::direction`] | [`Direction`] |
//! | `f` | [`Scanner::float`] | `Option<Fixed>` |
//! | `i` | [`Scanner::int`] | `Option<i32>` |
//! | `s` | [`Scanner::string`] | [`ArrayString`] |
//! | `t` | [`Scanner::sentence_type`] | [`SentenceToken`] |
//! | `D` | [`Scanner::date`] | `Option<Date>` |
//! | `T` | [`Scanner::time`] | `Option<Time>` |
//! | `_` | [`Scanner::skip`] | nothing |
//! | `;` | [`Scanner::optional`] | nothing, the remaining fields may be missing |
//!
//! Decoders chain the methods directly; [`scan`] interprets a directive
//! string at runtime for everything else.

use core::str;

use arrayvec::ArrayString;
use heapless::Vec;
use nom::{
    IResult, Parser as _,
    bytes::complete::take_while_m_n,
    character::complete::{char, digit0, one_of},
    combinator::{all_consuming, map, map_res, opt},
    error::{ErrorKind, make_error},
    sequence::preceded,
};

use crate::{Error, Fixed, SENTENCE_MAX_LEN};

/// Length of the talker + sentence identifier, e.g. `GPRMC`.
pub const SENTENCE_TOKEN_LEN: usize = 5;

/// Longest text an `s` field may hold.
pub const MAX_FIELD_LEN: usize = SENTENCE_MAX_LEN;

/// Most values a single [`scan`] call can produce.
pub const MAX_DIRECTIVES: usize = 32;

/// Talker + sentence identifier read by the `t` directive.
pub type SentenceToken = ArrayString<SENTENCE_TOKEN_LEN>;

/// Hemisphere of a latitude or longitude field.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i8)]
pub enum Direction {
    /// `S` or `W`
    Negative = -1,
    /// Empty field
    #[default]
    Absent = 0,
    /// `N` or `E`
    Positive = 1,
}

impl Direction {
    /// `-1`, `0` or `1`
    #[inline]
    pub fn signum(self) -> i32 {
        self as i8 as i32
    }
}

/// UTC date from a `ddmmyy` field. The year has two digits and no century.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date {
    pub day: u8,
    pub month: u8,
    pub year: u8,
}

/// UTC time of day from a `hhmmss[.sss]` field.
///
/// `seconds` may be `60` on a leap second; ranges are only checked when
/// converting with [`crate::to_epoch`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Time {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub microseconds: u32,
}

/// Printable ASCII that is neither a field separator nor the checksum marker.
#[inline]
pub(crate) fn is_field_char(c: char) -> bool {
    (' '..='~').contains(&c) && c != ',' && c != '*'
}

fn two_digits(i: &str) -> IResult<&str, u8> {
    map_res(
        take_while_m_n(2, 2, |c: char| c.is_ascii_digit()),
        str::parse::<u8>,
    )
    .parse(i)
}

fn parse_direction(i: &str) -> IResult<&str, Direction> {
    map(opt(one_of("NESW")), |d| match d {
        Some('N' | 'E') => Direction::Positive,
        Some(_) => Direction::Negative,
        None => Direction::Absent,
    })
    .parse(i)
}

/// `[+-]digits[.digits]`, at least one digit overall.
///
/// Integer digits that do not fit into `i32` are an error, fractional
/// digits beyond that are dropped.
pub(crate) fn parse_decimal(i: &str) -> IResult<&str, Fixed> {
    let (rest, (sign, int, frac)) = (
        opt(one_of("+-")),
        digit0,
        opt(preceded(char('.'), digit0)),
    )
        .parse(i)?;
    let frac = frac.unwrap_or("");
    if int.is_empty() && frac.is_empty() {
        return Err(nom::Err::Error(make_error(i, ErrorKind::Digit)));
    }

    let mut value: i32 = 0;
    for digit in int.bytes() {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(i32::from(digit - b'0')))
            .ok_or_else(|| nom::Err::Error(make_error(i, ErrorKind::TooLarge)))?;
    }
    let mut scale: i32 = 1;
    for digit in frac.bytes() {
        let next = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(i32::from(digit - b'0')))
            .zip(scale.checked_mul(10));
        match next {
            Some((v, s)) => (value, scale) = (v, s),
            None => break,
        }
    }
    if sign == Some('-') {
        value = -value;
    }

    Ok((rest, Fixed::new(value, scale)))
}

fn parse_date(i: &str) -> IResult<&str, Date> {
    map((two_digits, two_digits, two_digits), |(day, month, year)| {
        Date { day, month, year }
    })
    .parse(i)
}

fn parse_time(i: &str) -> IResult<&str, Time> {
    map(
        (
            two_digits,
            two_digits,
            two_digits,
            opt(preceded(char('.'), digit0)),
        ),
        |(hours, minutes, seconds, frac)| Time {
            hours,
            minutes,
            seconds,
            microseconds: frac.map_or(0, microseconds),
        },
    )
    .parse(i)
}

/// First six fractional digits as microseconds, the rest is ignored.
fn microseconds(frac: &str) -> u32 {
    let mut value = 0;
    let mut scale = 1_000_000;
    for digit in frac.bytes().take(6) {
        value = value * 10 + u32::from(digit - b'0');
        scale /= 10;
    }
    value * scale
}

fn parse_sentence_token(i: &str) -> IResult<&str, &str> {
    preceded(
        char('$'),
        take_while_m_n(SENTENCE_TOKEN_LEN, SENTENCE_TOKEN_LEN, is_field_char),
    )
    .parse(i)
}

/// Cursor over the fields of one sentence.
///
/// ```
/// use nmea_scan::{Direction, Fixed, Scanner};
///
/// let mut scanner = Scanner::new("$GPGLL,4916.45,N,12311.12,W,225444,A*31");
/// assert_eq!(scanner.sentence_type().unwrap().as_str(), "GPGLL");
/// assert_eq!(scanner.float().unwrap(), Some(Fixed::new(491645, 100)));
/// assert_eq!(scanner.direction().unwrap(), Direction::Positive);
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    rest: Option<&'a str>,
    optional: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(sentence: &'a str) -> Self {
        Self {
            rest: Some(sentence),
            optional: false,
        }
    }

    /// Raw text of the next field.
    pub fn field(&mut self) -> Result<&'a str, Error<'a>> {
        let Some(i) = self.rest else {
            return if self.optional {
                Ok("")
            } else {
                Err(Error::MissingField)
            };
        };
        let end = i.find(|c| !is_field_char(c)).unwrap_or(i.len());
        let (field, tail) = i.split_at(end);
        self.rest = tail.strip_prefix(',');
        Ok(field)
    }

    /// Every field after this point may be missing, missing fields read as empty.
    pub fn optional(&mut self) {
        self.optional = true;
    }

    /// `true` while there are fields left to read.
    pub fn has_fields(&self) -> bool {
        self.rest.is_some()
    }

    /// `c`: first character of the field.
    pub fn char(&mut self) -> Result<Option<char>, Error<'a>> {
        Ok(self.field()?.chars().next())
    }

    /// `d`: `N`/`E`, `S`/`W` or empty.
    pub fn direction(&mut self) -> Result<Direction, Error<'a>> {
        let field = self.field()?;
        Ok(all_consuming(parse_direction).parse(field)?.1)
    }

    /// `f`: decimal number, `None` for an empty field.
    pub fn float(&mut self) -> Result<Option<Fixed>, Error<'a>> {
        let field = self.field()?;
        if field.is_empty() {
            return Ok(None);
        }
        Ok(Some(all_consuming(parse_decimal).parse(field)?.1))
    }

    /// `i`: signed integer, `None` for an empty field.
    pub fn int(&mut self) -> Result<Option<i32>, Error<'a>> {
        let field = self.field()?;
        if field.is_empty() {
            return Ok(None);
        }
        Ok(Some(
            all_consuming(nom::character::complete::i32)
                .parse(field)?
                .1,
        ))
    }

    /// `s`: the raw field, rejected when longer than `N`.
    pub fn string<const N: usize>(&mut self) -> Result<ArrayString<N>, Error<'a>> {
        let field = self.field()?;
        ArrayString::from(field).map_err(|_| Error::ParameterLength {
            max_length: N,
            parameter_length: field.len(),
        })
    }

    /// `t`: `$` followed by the five character talker + sentence identifier.
    pub fn sentence_type(&mut self) -> Result<SentenceToken, Error<'a>> {
        let field = self.field()?;
        let (_, token) = all_consuming(parse_sentence_token).parse(field)?;
        SentenceToken::from(token).map_err(|_| Error::ParameterLength {
            max_length: SENTENCE_TOKEN_LEN,
            parameter_length: token.len(),
        })
    }

    /// `D`: `ddmmyy`, `None` unless the field is exactly six digits.
    pub fn date(&mut self) -> Result<Option<Date>, Error<'a>> {
        let field = self.field()?;
        Ok(all_consuming(parse_date)
            .parse(field)
            .ok()
            .map(|(_, date)| date))
    }

    /// `T`: `hhmmss[.ffffff]`, `None` when the field does not match.
    pub fn time(&mut self) -> Result<Option<Time>, Error<'a>> {
        let field = self.field()?;
        Ok(all_consuming(parse_time)
            .parse(field)
            .ok()
            .map(|(_, time)| time))
    }

    /// `_`: ignore one field.
    pub fn skip(&mut self) -> Result<(), Error<'a>> {
        self.field().map(|_| ())
    }
}

/// Output of one directive of [`scan`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Char(Option<char>),
    Direction(Direction),
    Float(Option<Fixed>),
    Int(Option<i32>),
    Str(ArrayString<MAX_FIELD_LEN>),
    Token(SentenceToken),
    Date(Option<Date>),
    Time(Option<Time>),
}

/// Reads `sentence` field by field according to the `format` directives
/// (see the [module documentation](self)), one [`Value`] per directive that
/// produces output.
///
/// ```
/// use nmea_scan::{scan, Fixed, Value};
///
/// let values = scan("$GPXXX,-1.23,V", "_fc").unwrap();
/// assert_eq!(
///     values.as_slice(),
///     &[Value::Float(Some(Fixed::new(-123, 100))), Value::Char(Some('V'))]
/// );
/// ```
pub fn scan<'a>(
    sentence: &'a str,
    format: &str,
) -> Result<Vec<Value, MAX_DIRECTIVES>, Error<'a>> {
    let mut scanner = Scanner::new(sentence);
    let mut values = Vec::new();
    for directive in format.chars() {
        let value = match directive {
            'c' => Value::Char(scanner.char()?),
            'd' => Value::Direction(scanner.direction()?),
            'f' => Value::Float(scanner.float()?),
            'i' => Value::Int(scanner.int()?),
            's' => Value::Str(scanner.string()?),
            't' => Value::Token(scanner.sentence_type()?),
            'D' => Value::Date(scanner.date()?),
            'T' => Value::Time(scanner.time()?),
            '_' => {
                scanner.skip()?;
                continue;
            }
            ';' => {
                scanner.optional();
                continue;
            }
            unknown => return Err(Error::UnknownDirective(unknown)),
        };
        values.push(value).map_err(|_| Error::ParameterLength {
            max_length: MAX_DIRECTIVES,
            parameter_length: format.len(),
        })?;
    }
    Ok(values)
}
