/// Fix type
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum FixType {
    Invalid,
    Gps,
    DGps,
    /// Precise Position Service
    Pps,
    Rtk,
    FloatRtk,
    Estimated,
    Manual,
    Simulation,
}

impl FixType {
    #[inline]
    pub fn is_valid(self) -> bool {
        match self {
            FixType::Simulation | FixType::Manual | FixType::Estimated | FixType::Invalid => false,
            FixType::DGps | FixType::Gps | FixType::Rtk | FixType::FloatRtk | FixType::Pps => true,
        }
    }
}

/// GGA fix quality indicator. Values outside `0..=8` are invalid.
impl From<i32> for FixType {
    fn from(quality: i32) -> Self {
        match quality {
            1 => FixType::Gps,
            2 => FixType::DGps,
            3 => FixType::Pps,
            4 => FixType::Rtk,
            5 => FixType::FloatRtk,
            6 => FixType::Estimated,
            7 => FixType::Manual,
            8 => FixType::Simulation,
            _ => FixType::Invalid,
        }
    }
}
