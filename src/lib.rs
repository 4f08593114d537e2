// Copyright (C) 2016 Felix Obenhuber
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! # NMEA 0183 scanner
//!
//! Allocation-free validation and decoding of NMEA 0183 sentences with
//! every numeric field kept as an exact fixed-point [`Fixed`] value.
//!
//! - [`check`] / [`validate`] test framing, length, characters and checksum.
//! - [`classify`] tells which [`SentenceType`] a sentence carries.
//! - `parse_xxx` functions such as [`parse_rmc`] decode one kind of sentence
//!   into a record, [`parse_str`] does validation and dispatch in one go.
//! - [`Scanner`] and [`scan`] read arbitrary sentences field by field.
//! - [`rescale`], [`to_float`], [`to_coordinate_degrees`] and [`to_epoch`]
//!   convert the raw values.
//!
//! Absent fields are `None` (or [`Direction::Absent`]), they never fail a
//! parse.
//!
//! ```
//! use nmea_scan::{parse_str, to_epoch, ParseResult};
//!
//! let sentence = "$GPRMC,081836,A,3751.65,S,14507.36,E,000.0,360.0,130998,011.3,E*62";
//! let Ok(ParseResult::RMC(rmc)) = parse_str(sentence) else {
//!     panic!("not a valid RMC sentence");
//! };
//! assert!(rmc.valid);
//! let latitude = rmc.latitude.unwrap().to_coordinate();
//! assert!((latitude + 37. + 51.65 / 60.).abs() < 1e-9);
//! assert!(to_epoch(rmc.date, rmc.time).is_ok());
//! ```
//!
//! ## Crate features
#![cfg_attr(
    feature = "features-docs",
    doc = ::document_features::document_features!()
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod fixed;
mod parse;
mod scan;
pub mod sentences;
mod time;

#[doc(inline)]
pub use sentences::*;

pub use crate::{
    error::Error,
    fixed::{Fixed, rescale, to_coordinate_degrees, to_float},
    parse::{
        ParseResult, SENTENCE_MAX_LEN, check, checksum, classify, parse_bytes, parse_str,
        validate,
    },
    scan::{
        Date, Direction, MAX_DIRECTIVES, MAX_FIELD_LEN, SENTENCE_TOKEN_LEN, Scanner,
        SentenceToken, Time, Value, scan,
    },
    time::{Timestamp, to_epoch},
};

#[cfg(all(doctest, feature = "all-sentences"))]
doc_comment::doctest!("../README.md");

macro_rules! count_tts {
    () => {0usize};
    ($_head:tt , $($tail:tt)*) => {1usize + count_tts!($($tail)*)};
    ($item:tt) => {1usize};
}
pub(crate) use count_tts;

macro_rules! define_sentence_type_enum {
    (
        $(#[$outer:meta])*
        pub enum $Name:ident {
            $(
            $(#[$variant:meta])*
            $Variant:ident
            ),* $(,)* }
    ) => {
        $(#[$outer])*
        pub enum $Name {
            $(
                $(#[$variant])*
                $Variant
            ),*,
            /// Any other or malformed sentence identifier
            Unknown,
        }

        impl<'a> TryFrom<&'a str> for $Name {
            type Error = crate::Error<'a>;

            fn try_from(s: &'a str) -> Result<$Name, Self::Error> {
                match s {
                    $(stringify!($Variant) => Ok($Name::$Variant),)*
                    _ => Err(crate::Error::Unknown(s)),
                }
            }
        }

        impl $Name {
            const COUNT: usize = count_tts!($($Variant),*);
            /// Every known sentence type, without [`Self::Unknown`].
            pub const TYPES: [$Name; $Name::COUNT] = [$($Name::$Variant,)*];

            /// Maps a three letter sentence identifier, e.g. `RMC`.
            pub fn from_message_id(message_id: &str) -> Self {
                Self::try_from(message_id).unwrap_or($Name::Unknown)
            }

            pub fn as_str(&self) -> &str {
                match self {
                    $($Name::$Variant => stringify!($Variant),)*
                    $Name::Unknown => "Unknown",
                }
            }
        }

        impl core::fmt::Display for $Name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    }
}

define_sentence_type_enum! {
    /// NMEA sentence type
    ///
    /// ## Types
    ///
    /// ### GNSS
    ///
    /// - [`SentenceType::GGA`]
    /// - [`SentenceType::GLL`]
    /// - [`SentenceType::GSA`]
    /// - [`SentenceType::GST`]
    /// - [`SentenceType::GSV`]
    /// - [`SentenceType::RMC`]
    /// - [`SentenceType::VTG`]
    ///
    /// ### Other
    ///
    /// - [`SentenceType::TXT`]
    /// - [`SentenceType::ZDA`]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "defmt", derive(defmt::Format))]
    #[derive(Debug, Hash, PartialEq, Eq, Clone, Copy)]
    #[repr(u32)]
    pub enum SentenceType {
        /// GGA - Global Positioning System Fix Data
        ///
        /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
        ///
        /// Type: `GNSS`
        GGA,
        /// GLL - Geographic Position - Latitude/Longitude
        ///
        /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gll_geographic_position_latitudelongitude>
        ///
        /// Type: `GNSS`
        GLL,
        /// GSA - GPS DOP and active satellites
        ///
        /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsa_gps_dop_and_active_satellites>
        ///
        /// Type: `GNSS`
        GSA,
        /// GST - GPS Pseudorange Noise Statistics
        ///
        /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gst_gps_pseudorange_noise_statistics>
        ///
        /// Type: `GNSS`
        GST,
        /// GSV - Satellites in view
        ///
        /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsv_satellites_in_view>
        ///
        /// Type: `GNSS`
        GSV,
        /// RMC - Recommended Minimum Navigation Information
        ///
        /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_rmc_recommended_minimum_navigation_information>
        ///
        /// Type: `GNSS`
        RMC,
        /// TXT - Text message
        ///
        /// Type: `Other`
        TXT,
        /// VTG - Track made good and Ground speed
        ///
        /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_vtg_track_made_good_and_ground_speed>
        ///
        /// Type: `GNSS`
        VTG,
        /// ZDA - Time & Date - UTC, day, month, year and local time zone
        ///
        /// <https://gpsd.gitlab.io/gpsd/NMEA.html#_zda_time_date_utc_day_month_year_and_local_time_zone>
        ///
        /// Type: `Other`
        ZDA,
    }
}
