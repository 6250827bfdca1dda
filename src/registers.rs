//! L3GD20 Register Map
//!
//! The L3GD20 is controlled through byte-wide registers:
//! - Identification: WHO_AM_I
//! - Control registers: power mode, axis enable, data rate, full-scale range
//! - Data registers: angular rate outputs, little-endian per axis
//! - FIFO and interrupt registers
//!
//! Only CTRL_REG1, CTRL_REG4 and the output block are used by the driver.
//! WHO_AM_I is read on request only. The others are listed for completeness.

/// Setting this bit on a register address makes the device increment the
/// register pointer after every byte of a multi-byte transfer.
pub const AUTO_INCREMENT: u8 = 0x80;

#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// Device identification register (0x0F), reads 0xD4
    WhoAmI = 0x0F,

    /// Control register 1 (0x20)
    /// Output data rate, bandwidth, power-down and X/Y/Z enable bits
    CtrlReg1 = 0x20,
    /// Control register 2 (0x21), high-pass filter
    CtrlReg2 = 0x21,
    /// Control register 3 (0x22), interrupt pins
    CtrlReg3 = 0x22,
    /// Control register 4 (0x23)
    /// Block data update, endianness and full-scale selection
    CtrlReg4 = 0x23,
    /// Control register 5 (0x24), reboot, FIFO and filter path
    CtrlReg5 = 0x24,
    /// High-pass filter reference value
    Reference = 0x25,
    /// Temperature output
    OutTemp = 0x26,
    /// Data-ready and overrun flags
    StatusReg = 0x27,

    // Angular rate data registers
    /// Low byte of X-axis angular rate
    OutX_L = 0x28,
    /// High byte of X-axis angular rate
    OutX_H = 0x29,
    /// Low byte of Y-axis angular rate
    OutY_L = 0x2A,
    /// High byte of Y-axis angular rate
    OutY_H = 0x2B,
    /// Low byte of Z-axis angular rate
    OutZ_L = 0x2C,
    /// High byte of Z-axis angular rate
    OutZ_H = 0x2D,

    // FIFO registers
    FifoCtrlReg = 0x2E,
    FifoSrcReg = 0x2F,

    // Interrupt 1 registers
    Int1Cfg = 0x30,
    Int1Src = 0x31,
    Int1Tsh_XH = 0x32,
    Int1Tsh_XL = 0x33,
    Int1Tsh_YH = 0x34,
    Int1Tsh_YL = 0x35,
    Int1Tsh_ZH = 0x36,
    Int1Tsh_ZL = 0x37,
    Int1Duration = 0x38,
}

impl Register {
    /// Register address with the auto-increment bit set, for block reads.
    pub const fn auto_increment(self) -> u8 {
        self as u8 | AUTO_INCREMENT
    }
}

impl From<Register> for u8 {
    fn from(reg: Register) -> Self {
        reg as u8
    }
}
