use core::fmt;

use super::FixType;

/// FAA mode indicator, the optional last field of RMC, GLL and VTG since
/// NMEA 2.3.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaaMode {
    /// A - Autonomous mode
    Autonomous,
    /// C - Quectel Querk, "Caution"
    Caution,
    /// D - Differential Mode
    Differential,
    /// E - Estimated (dead-reckoning) mode
    Estimated,
    /// F - RTK Float mode
    FloatRtk,
    /// M - Manual Input Mode
    Manual,
    /// N - Data Not Valid
    DataNotValid,
    /// P - Precise (4.00 and later)
    ///
    /// Sort of DGPS, NMEA 4+
    Precise,
    /// R - RTK Integer mode
    FixedRtk,
    /// S - Simulated Mode
    Simulator,
    /// U - Quectel Querk, "Unsafe"
    Unsafe,
}

impl FaaMode {
    /// `true` when the receiver reports a usable position.
    pub fn is_valid(self) -> bool {
        FixType::from(self).is_valid()
    }
}

impl From<FaaMode> for FixType {
    fn from(mode: FaaMode) -> Self {
        match mode {
            FaaMode::Autonomous => FixType::Gps,
            FaaMode::Caution => FixType::Invalid,
            FaaMode::Differential => FixType::DGps,
            FaaMode::Estimated => FixType::Estimated,
            FaaMode::FloatRtk => FixType::FloatRtk,
            FaaMode::DataNotValid => FixType::Invalid,
            FaaMode::Precise => FixType::DGps,
            FaaMode::FixedRtk => FixType::Rtk,
            FaaMode::Manual => FixType::Manual,
            FaaMode::Simulator => FixType::Simulation,
            FaaMode::Unsafe => FixType::Invalid,
        }
    }
}

impl fmt::Display for FaaMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            FaaMode::Autonomous => 'A',
            FaaMode::Caution => 'C',
            FaaMode::Differential => 'D',
            FaaMode::Estimated => 'E',
            FaaMode::FloatRtk => 'F',
            FaaMode::Manual => 'M',
            FaaMode::DataNotValid => 'N',
            FaaMode::Precise => 'P',
            FaaMode::FixedRtk => 'R',
            FaaMode::Simulator => 'S',
            FaaMode::Unsafe => 'U',
        };
        write!(f, "{}", c)
    }
}

/// Maps the mode letter of a `c` field, `None` for an unknown letter.
pub fn parse_faa_mode(value: char) -> Option<FaaMode> {
    match value {
        'A' => Some(FaaMode::Autonomous),
        'C' => Some(FaaMode::Caution),
        'D' => Some(FaaMode::Differential),
        'E' => Some(FaaMode::Estimated),
        'F' => Some(FaaMode::FloatRtk),
        'N' => Some(FaaMode::DataNotValid),
        'P' => Some(FaaMode::Precise),
        'R' => Some(FaaMode::FixedRtk),
        'M' => Some(FaaMode::Manual),
        'S' => Some(FaaMode::Simulator),
        'U' => Some(FaaMode::Unsafe),
        _ => None,
    }
}
