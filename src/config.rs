//! L3GD20 Construction Settings
//!
//! Everything the driver needs to know before the first bus transaction:
//! - which address the device answers on
//! - which full-scale range to select during initialization

use crate::{address::Address, gyro::GyroRange};

/// Settings applied by [`L3gd20::with_config`](crate::sensor::L3gd20::with_config).
///
/// The default matches [`L3gd20::new`](crate::sensor::L3gd20::new):
/// address 0x6B and ±250 dps.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    pub address: Address,
    pub range: GyroRange,
}

impl Config {
    pub fn address(mut self, address: Address) -> Self {
        self.address = address;
        self
    }

    pub fn range(mut self, range: GyroRange) -> Self {
        self.range = range;
        self
    }
}
