//! Fixed-point numbers as they appear in NMEA fields.
//!
//! A decimal field such as `4807.038` is kept as an integer mantissa plus a
//! power-of-ten scale (`4807038 / 1000`), so no precision is lost until the
//! caller decides to convert.

use core::fmt;

use crate::scan::Direction;

/// Decimal number stored as `value / scale`.
///
/// A `scale` of `0` means the value is undefined; this is also the
/// [`Default`], so an absent field (`None`) can be flattened to the raw
/// representation with `unwrap_or_default()`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Fixed {
    pub value: i32,
    pub scale: i32,
}

impl Fixed {
    #[inline]
    pub const fn new(value: i32, scale: i32) -> Self {
        Self { value, scale }
    }

    /// Returns `false` for the `scale == 0` sentinel.
    #[inline]
    pub const fn is_defined(&self) -> bool {
        self.scale != 0
    }

    /// Mantissa of this number expressed with `new_scale`, see [`rescale`].
    #[inline]
    pub fn rescale(&self, new_scale: i32) -> i32 {
        rescale(self.value, self.scale, new_scale)
    }

    /// See [`to_float`].
    #[inline]
    pub fn to_f64(&self) -> f64 {
        to_float(self.value, self.scale)
    }

    /// See [`to_coordinate_degrees`].
    #[inline]
    pub fn to_coordinate(&self) -> f64 {
        to_coordinate_degrees(self.value, self.scale)
    }

    /// Applies the sign of a hemisphere field. An absent direction leaves
    /// the value untouched.
    pub fn with_direction(self, direction: Direction) -> Self {
        match direction {
            Direction::Negative => Self {
                value: self.value.saturating_neg(),
                scale: self.scale,
            },
            Direction::Absent | Direction::Positive => self,
        }
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_defined() {
            return f.write_str("NaN");
        }
        let mut digits = 0;
        let mut scale = self.scale.unsigned_abs();
        while scale >= 10 {
            scale /= 10;
            digits += 1;
        }
        let value = i64::from(self.value);
        let scale = i64::from(self.scale);
        let sign = if value < 0 { "-" } else { "" };
        let (int, frac) = (value.abs() / scale, value.abs() % scale);
        if digits == 0 {
            write!(f, "{}{}", sign, int)
        } else {
            write!(f, "{}{}.{:0width$}", sign, int, frac, width = digits)
        }
    }
}

/// Converts a fixed-point mantissa from `from_scale` to `to_scale`.
///
/// Going to a coarser scale rounds half away from zero on the dropped
/// digits; an undefined value (`from_scale == 0`) always yields `0`.
/// Results that do not fit into `i32` saturate.
///
/// ```
/// use nmea_scan::rescale;
///
/// assert_eq!(rescale(1234, 10, 1), 123);
/// assert_eq!(rescale(1235, 10, 1), 124);
/// assert_eq!(rescale(-1235, 10, 1), -124);
/// assert_eq!(rescale(1234, 10, 1000), 123400);
/// assert_eq!(rescale(42, 0, 3), 0);
/// ```
pub fn rescale(value: i32, from_scale: i32, to_scale: i32) -> i32 {
    if from_scale == 0 {
        return 0;
    }
    if from_scale == to_scale {
        return value;
    }
    let value = i64::from(value);
    let (from, to) = (i64::from(from_scale), i64::from(to_scale));
    let rescaled = if from > to {
        let divisor = from / to.max(1);
        (value + value.signum() * divisor / 2) / divisor
    } else {
        value * (to / from)
    };
    saturate(rescaled)
}

/// Real value of a fixed-point number, NaN when `scale == 0`.
pub fn to_float(value: i32, scale: i32) -> f64 {
    if scale == 0 {
        return f64::NAN;
    }
    f64::from(value) / f64::from(scale)
}

/// Converts an NMEA `DDMM.MMMM` coordinate to decimal degrees.
///
/// The whole degrees are the hundreds of the number, the rest are minutes.
/// NaN when `scale == 0`.
///
/// ```
/// use nmea_scan::to_coordinate_degrees;
///
/// assert_eq!(to_coordinate_degrees(4200, 1), 42.0);
/// assert_eq!(to_coordinate_degrees(423000, 100), 42.5);
/// assert!(to_coordinate_degrees(42, 0).is_nan());
/// ```
pub fn to_coordinate_degrees(value: i32, scale: i32) -> f64 {
    if scale == 0 {
        return f64::NAN;
    }
    let value = i64::from(value);
    let scale = i64::from(scale);
    let degrees = value / (scale * 100);
    let minutes = value % (scale * 100);
    degrees as f64 + minutes as f64 / (60 * scale) as f64
}

fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}
