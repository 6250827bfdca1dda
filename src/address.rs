//! L3GD20 I2C Address Configuration
//!
//! The L3GD20 answers on one of two 7-bit addresses, selected by the SDO/SA0 pin:
//! - 0x6B (default, SA0 pulled high, as on most breakout boards)
//! - 0x6A (alternate, SA0 tied to GND)
//!
//! This allows two gyroscopes to share one I2C bus.

/// Represents an L3GD20 I2C address.
///
/// Note: These are 7-bit addresses. Some I2C implementations may
/// require left-shifting by 1 to create the 8-bit address.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address(pub u8);

impl Address {
    /// Address with SA0 tied to GND.
    pub const ALTERNATE: Address = Address(0x6A);
}

impl Default for Address {
    /// Returns the default I2C address (0x6B).
    fn default() -> Self {
        Self(0x6B)
    }
}

impl From<Address> for u8 {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl From<u8> for Address {
    /// Creates an address from raw u8 value.
    /// Typically used with either 0x6B or 0x6A.
    fn from(addr: u8) -> Self {
        Self(addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_address_is_0x6b() {
        assert_eq!(u8::from(Address::default()), 0x6B);
        assert_eq!(u8::from(Address::ALTERNATE), 0x6A);
        assert_eq!(Address::from(0x6A), Address::ALTERNATE);
    }
}
