use crate::error::InvalidRange;

/// Raw gyro readings vector, in signed sensor counts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gyro {
    pub(crate) x: i16,
    pub(crate) y: i16,
    pub(crate) z: i16,
}

impl Gyro {
    pub fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    /// Decodes the OUT_X_L..OUT_Z_H block. The L3GD20 sends the low byte first.
    pub fn from_bytes(data: [u8; 6]) -> Self {
        let x = [data[0], data[1]];
        let y = [data[2], data[3]];
        let z = [data[4], data[5]];
        Self {
            x: i16::from_le_bytes(x),
            y: i16::from_le_bytes(y),
            z: i16::from_le_bytes(z),
        }
    }

    pub fn x(&self) -> i16 {
        self.x
    }

    pub fn y(&self) -> i16 {
        self.y
    }

    pub fn z(&self) -> i16 {
        self.z
    }

    pub fn scaled(&self, range: GyroRange) -> GyroF32 {
        GyroF32 {
            x: range.scale_value(self.x),
            y: range.scale_value(self.y),
            z: range.scale_value(self.z),
        }
    }
}

/// Full-scale range of the gyroscope.
///
/// The discriminant is the byte written to CTRL_REG4: FS1/FS0 live in bits 5:4,
/// every other bit of the register is left at zero.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum GyroRange {
    /// ±250 dps, 8.75 mdps/digit
    #[default]
    Dps250 = 0x00,
    /// ±500 dps, 17.5 mdps/digit
    Dps500 = 0x10,
    /// ±2000 dps, 70 mdps/digit
    Dps2000 = 0x20,
}

pub const RANGE_250DPS: GyroRange = GyroRange::Dps250;
pub const RANGE_500DPS: GyroRange = GyroRange::Dps500;
pub const RANGE_2000DPS: GyroRange = GyroRange::Dps2000;

impl GyroRange {
    /// Degrees per second represented by one count.
    pub const fn scale(self) -> f32 {
        match self {
            Self::Dps250 => 0.00875,
            Self::Dps500 => 0.0175,
            Self::Dps2000 => 0.07,
        }
    }

    pub fn scale_value(self, value: i16) -> f32 {
        (value as f32) * self.scale()
    }

    /// Byte written to CTRL_REG4.
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

impl From<GyroRange> for u8 {
    fn from(range: GyroRange) -> Self {
        range.bits()
    }
}

impl TryFrom<u8> for GyroRange {
    type Error = InvalidRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x00 => Ok(Self::Dps250),
            0x10 => Ok(Self::Dps500),
            0x20 => Ok(Self::Dps2000),
            other => Err(InvalidRange(other)),
        }
    }
}

/// Angular rate in degrees per second.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GyroF32 {
    x: f32,
    y: f32,
    z: f32,
}

impl GyroF32 {
    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn z(&self) -> f32 {
        self.z
    }
}

impl From<GyroF32> for (f32, f32, f32) {
    fn from(value: GyroF32) -> Self {
        (value.x, value.y, value.z)
    }
}
