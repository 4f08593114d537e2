use crate::{
    Error, Fixed, SentenceType,
    scan::Scanner,
    sentences::scan_header,
};

/// Satellite selection mode.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GsaMode {
    /// M - forced to operate in 2D or 3D
    Manual,
    /// A - automatic 2D/3D
    Automatic,
}

/// Fix dimension reported by GSA.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GsaFixType {
    NoFix = 1,
    Fix2D = 2,
    Fix3D = 3,
}

/// GSA - GPS DOP and active satellites
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gsa_gps_dop_and_active_satellites>
///
/// ```text
///         1 2 3                        14 15  16  17
///         | | |                         |  |   |   |
///  $--GSA,a,a,x,x,x,x,x,x,x,x,x,x,x,x,x,x,x.x,x.x,x.x*hh<CR><LF>
/// ```
///
/// Unknown mode or fix type values are kept as `None`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GsaData {
    pub mode: Option<GsaMode>,
    pub fix_type: Option<GsaFixType>,
    /// PRNs of the satellites used in the fix, one slot per field
    pub sats: [Option<i32>; 12],
    pub pdop: Option<Fixed>,
    pub hdop: Option<Fixed>,
    pub vdop: Option<Fixed>,
}

impl GsaData {
    /// PRNs of the used satellites, skipping empty slots.
    pub fn fix_sats_prn(&self) -> impl Iterator<Item = i32> + '_ {
        self.sats.iter().flatten().copied()
    }
}

/// # Parse GSA message
///
/// Directives: `tciiiiiiiiiiiiifff`
///
/// ```
/// use nmea_scan::{parse_gsa, GsaFixType};
///
/// let gsa = parse_gsa("$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39").unwrap();
/// assert_eq!(gsa.fix_type, Some(GsaFixType::Fix3D));
/// assert_eq!(gsa.fix_sats_prn().count(), 5);
/// ```
pub fn parse_gsa(sentence: &str) -> Result<GsaData, Error<'_>> {
    let mut scanner = Scanner::new(sentence);
    scan_header(&mut scanner, SentenceType::GSA)?;

    let mode = scanner.char()?.and_then(|mode| match mode {
        'M' => Some(GsaMode::Manual),
        'A' => Some(GsaMode::Automatic),
        _ => None,
    });
    let fix_type = scanner.int()?.and_then(|fix_type| match fix_type {
        1 => Some(GsaFixType::NoFix),
        2 => Some(GsaFixType::Fix2D),
        3 => Some(GsaFixType::Fix3D),
        _ => None,
    });
    let mut sats = [None; 12];
    for sat in sats.iter_mut() {
        *sat = scanner.int()?;
    }

    Ok(GsaData {
        mode,
        fix_type,
        sats,
        pdop: scanner.float()?,
        hdop: scanner.float()?,
        vdop: scanner.float()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Value, scan};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_gsa() {
        let gsa = parse_gsa("$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39").unwrap();
        assert_eq!(
            gsa,
            GsaData {
                mode: Some(GsaMode::Automatic),
                fix_type: Some(GsaFixType::Fix3D),
                sats: [
                    Some(4),
                    Some(5),
                    None,
                    Some(9),
                    Some(12),
                    None,
                    None,
                    Some(24),
                    None,
                    None,
                    None,
                    None
                ],
                pdop: Some(Fixed::new(25, 10)),
                hdop: Some(Fixed::new(13, 10)),
                vdop: Some(Fixed::new(21, 10)),
            }
        );
        assert_eq!(
            gsa.fix_sats_prn().collect::<Vec<_>>(),
            vec![4, 5, 9, 12, 24]
        );
    }

    #[test]
    fn test_parse_gsa_no_fix() {
        let gsa = parse_gsa("$GPGSA,A,1,,,,,,,,,,,,,99.99,99.99,99.99*30").unwrap();
        assert_eq!(gsa.fix_type, Some(GsaFixType::NoFix));
        assert_eq!(gsa.fix_sats_prn().count(), 0);
        assert_eq!(gsa.vdop, Some(Fixed::new(9999, 100)));

        let gsa = parse_gsa("$GNGSA,X,7,,,,,,,,,,,,,,,").unwrap();
        assert_eq!(gsa.mode, None);
        assert_eq!(gsa.fix_type, None);
        assert_eq!(gsa.pdop, None);
    }

    #[test]
    fn test_parse_gsa_too_short() {
        assert_eq!(
            parse_gsa("$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3"),
            Err(Error::MissingField)
        );
    }

    #[test]
    fn test_parse_gsa_matches_scan() {
        let sentence = "$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39";
        let gsa = parse_gsa(sentence).unwrap();
        let values = scan(sentence, "tciiiiiiiiiiiiifff").unwrap();
        assert_eq!(values.len(), 18);
        for (value, sat) in values[3..15].iter().zip(gsa.sats) {
            assert_eq!(*value, Value::Int(sat));
        }
        assert_eq!(values[17], Value::Float(gsa.vdop));
    }
}
