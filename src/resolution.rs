use embassy_time::Duration;

/// DS18B20 conversion resolution.
/// Each extra bit of precision doubles the worst-case conversion time,
/// so the sampling cadence has to leave room for the slowest setting in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Resolution {
    Bits9,
    Bits10,
    Bits11,
    Bits12,
}

impl Resolution {
    /// Parse a bit count as stored in the configuration file.
    /// Returns None outside the 9-12 range the part supports.
    pub fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            9 => Some(Resolution::Bits9),
            10 => Some(Resolution::Bits10),
            11 => Some(Resolution::Bits11),
            12 => Some(Resolution::Bits12),
            _ => None,
        }
    }

    pub const fn bits(self) -> u8 {
        match self {
            Resolution::Bits9 => 9,
            Resolution::Bits10 => 10,
            Resolution::Bits11 => 11,
            Resolution::Bits12 => 12,
        }
    }

    /// Worst-case conversion time per the datasheet (t_CONV).
    pub const fn conversion_time(self) -> Duration {
        match self {
            Resolution::Bits9 => Duration::from_micros(93_750),
            Resolution::Bits10 => Duration::from_micros(187_500),
            Resolution::Bits11 => Duration::from_micros(375_000),
            Resolution::Bits12 => Duration::from_micros(750_000),
        }
    }

    /// Smallest temperature step representable at this resolution, in degrees C.
    pub const fn celsius_step(self) -> f32 {
        match self {
            Resolution::Bits9 => 0.5,
            Resolution::Bits10 => 0.25,
            Resolution::Bits11 => 0.125,
            Resolution::Bits12 => 0.0625,
        }
    }
}
