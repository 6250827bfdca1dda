//! L3GD20 Blocking Driver Implementation
//!
//! Brings the gyroscope up in normal mode with all three axes enabled, selects
//! the full-scale range and reads scaled angular rates. Every operation is a
//! single request/response exchange over the bus; nothing is retried.

use crate::{
    address::Address,
    bus::RegisterBus,
    config::Config,
    error::{Error, InitError},
    gyro::{Gyro, GyroF32, GyroRange},
    registers::Register,
    L3GD20_DEVICE_ID,
};

/// CTRL_REG1 with PD cleared: power-down.
pub(crate) const CTRL_REG1_POWER_DOWN: u8 = 0b0000_0000;
/// CTRL_REG1 with PD, Zen, Yen and Xen set. DR and BW stay 00, the lowest data rate.
pub(crate) const CTRL_REG1_NORMAL_XYZ: u8 = 0b0000_1111;

/// ST L3GD20 Driver
pub struct L3gd20<B>
where
    B: RegisterBus,
{
    bus: B,
    address: u8,
    range: GyroRange,
}

impl<B> L3gd20<B>
where
    B: RegisterBus,
{
    /// Reset the gyroscope, enable all axes and select ±250 dps.
    ///
    /// Device presence is not checked; see [`verify_device`](Self::verify_device).
    pub fn new(bus: B) -> Result<Self, InitError<B, B::Error>> {
        Self::with_config(bus, Config::default())
    }

    pub fn with_config(bus: B, config: Config) -> Result<Self, InitError<B, B::Error>> {
        let mut sensor = Self {
            bus,
            address: config.address.into(),
            range: config.range,
        };

        if let Err(error) = sensor.power_on(config.range) {
            Err(InitError {
                error,
                bus: sensor.bus,
            })
        } else {
            Ok(sensor)
        }
    }

    /// Returns the underlying bus, consuming this driver.
    pub fn release(self) -> B {
        self.bus
    }

    fn power_on(&mut self, range: GyroRange) -> Result<(), Error<B::Error>> {
        log::debug!("l3gd20@{:#04x}: reset, enable x/y/z", self.address);
        self.write_register(Register::CtrlReg1, CTRL_REG1_POWER_DOWN)?;
        self.write_register(Register::CtrlReg1, CTRL_REG1_NORMAL_XYZ)?;
        self.set_range(range)
    }

    pub(crate) fn write_register(
        &mut self,
        reg: Register,
        value: u8,
    ) -> Result<(), Error<B::Error>> {
        self.bus
            .write_block(self.address, reg.into(), &[value])
            .map_err(Error::Transport)
    }

    /// Multi-byte reads set the auto-increment bit on the start register.
    pub(crate) fn read_registers(
        &mut self,
        reg: Register,
        buf: &mut [u8],
    ) -> Result<(), Error<B::Error>> {
        let start = if buf.len() > 1 {
            reg.auto_increment()
        } else {
            reg.into()
        };
        let actual = self
            .bus
            .read_block(self.address, start, buf)
            .map_err(Error::Transport)?;

        if actual != buf.len() {
            log::warn!(
                "l3gd20@{:#04x}: read of {:?} returned {} of {} bytes",
                self.address,
                reg,
                actual,
                buf.len()
            );
            return Err(Error::Decode {
                expected: buf.len(),
                actual,
            });
        }
        Ok(())
    }

    pub fn address(&self) -> Address {
        Address(self.address)
    }

    pub fn range(&self) -> GyroRange {
        self.range
    }

    /// Degrees per second per count for the current range.
    pub fn scale_factor(&self) -> f32 {
        self.range.scale()
    }

    /// Select the full-scale range.
    ///
    /// The range is only recorded once CTRL_REG4 has been written, so a failed
    /// write leaves the previous range and scale factor in place.
    pub fn set_range(&mut self, range: GyroRange) -> Result<(), Error<B::Error>> {
        self.write_register(Register::CtrlReg4, range.bits())?;
        log::debug!("l3gd20@{:#04x}: range {:?}", self.address, range);
        self.range = range;
        Ok(())
    }

    /// Select the full-scale range from its raw CTRL_REG4 byte.
    pub fn set_range_bits(&mut self, bits: u8) -> Result<(), Error<B::Error>> {
        let range = GyroRange::try_from(bits)?;
        self.set_range(range)
    }

    /// Raw signed counts for X, Y and Z, read in one auto-increment transaction.
    pub fn read_raw(&mut self) -> Result<Gyro, Error<B::Error>> {
        let mut data = [0; 6];
        self.read_registers(Register::OutX_L, &mut data)?;
        let gyro = Gyro::from_bytes(data);
        log::trace!("l3gd20@{:#04x}: raw {:?}", self.address, gyro);
        Ok(gyro)
    }

    /// Angular rate in degrees per second. No filtering or offset removal.
    pub fn read(&mut self) -> Result<GyroF32, Error<B::Error>> {
        let raw = self.read_raw()?;
        Ok(raw.scaled(self.range))
    }

    pub fn who_am_i(&mut self) -> Result<u8, Error<B::Error>> {
        let mut buf = [0; 1];
        self.read_registers(Register::WhoAmI, &mut buf)?;
        Ok(buf[0])
    }

    /// Check WHO_AM_I against the L3GD20 identifier. Never called implicitly.
    pub fn verify_device(&mut self) -> Result<(), Error<B::Error>> {
        let id = self.who_am_i()?;
        if id != L3GD20_DEVICE_ID {
            log::warn!("l3gd20@{:#04x}: unexpected WHO_AM_I {:#04x}", self.address, id);
            return Err(Error::WrongDevice(id));
        }
        Ok(())
    }
}
