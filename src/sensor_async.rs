//! L3GD20 Asynchronous Driver Implementation
//!
//! Non-blocking interface to the L3GD20 for systems running an async executor.
//! It mirrors the blocking version (sensor.rs) operation for operation: the
//! same initialization sequence, the same range bookkeeping and the same
//! decoding, with each bus exchange awaited in turn.

use crate::{
    address::Address,
    bus::AsyncRegisterBus,
    config::Config,
    error::{Error, InitError},
    gyro::{Gyro, GyroF32, GyroRange},
    registers::Register,
    sensor::{CTRL_REG1_NORMAL_XYZ, CTRL_REG1_POWER_DOWN},
    L3GD20_DEVICE_ID,
};

/// ST L3GD20 Driver
pub struct L3gd20<B>
where
    B: AsyncRegisterBus,
{
    bus: B,
    address: u8,
    range: GyroRange,
}

impl<B> L3gd20<B>
where
    B: AsyncRegisterBus,
{
    /// Reset the gyroscope, enable all axes and select ±250 dps.
    pub async fn new(bus: B) -> Result<Self, InitError<B, B::Error>> {
        Self::with_config(bus, Config::default()).await
    }

    pub async fn with_config(bus: B, config: Config) -> Result<Self, InitError<B, B::Error>> {
        let mut sensor = Self {
            bus,
            address: config.address.into(),
            range: config.range,
        };

        if let Err(error) = sensor.power_on(config.range).await {
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

    async fn power_on(&mut self, range: GyroRange) -> Result<(), Error<B::Error>> {
        log::debug!("l3gd20@{:#04x}: reset, enable x/y/z", self.address);
        self.write_register(Register::CtrlReg1, CTRL_REG1_POWER_DOWN)
            .await?;
        self.write_register(Register::CtrlReg1, CTRL_REG1_NORMAL_XYZ)
            .await?;
        self.set_range(range).await
    }

    pub(crate) async fn write_register(
        &mut self,
        reg: Register,
        value: u8,
    ) -> Result<(), Error<B::Error>> {
        self.bus
            .write_block(self.address, reg.into(), &[value])
            .await
            .map_err(Error::Transport)
    }

    pub(crate) async fn read_registers(
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
            .await
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

    pub fn scale_factor(&self) -> f32 {
        self.range.scale()
    }

    /// Select the full-scale range. Recorded only after CTRL_REG4 was written.
    pub async fn set_range(&mut self, range: GyroRange) -> Result<(), Error<B::Error>> {
        self.write_register(Register::CtrlReg4, range.bits())
            .await?;
        log::debug!("l3gd20@{:#04x}: range {:?}", self.address, range);
        self.range = range;
        Ok(())
    }

    pub async fn set_range_bits(&mut self, bits: u8) -> Result<(), Error<B::Error>> {
        let range = GyroRange::try_from(bits)?;
        self.set_range(range).await
    }

    pub async fn read_raw(&mut self) -> Result<Gyro, Error<B::Error>> {
        let mut data = [0; 6];
        self.read_registers(Register::OutX_L, &mut data).await?;
        let gyro = Gyro::from_bytes(data);
        log::trace!("l3gd20@{:#04x}: raw {:?}", self.address, gyro);
        Ok(gyro)
    }

    /// Angular rate in degrees per second.
    pub async fn read(&mut self) -> Result<GyroF32, Error<B::Error>> {
        let raw = self.read_raw().await?;
        Ok(raw.scaled(self.range))
    }

    pub async fn who_am_i(&mut self) -> Result<u8, Error<B::Error>> {
        let mut buf = [0; 1];
        self.read_registers(Register::WhoAmI, &mut buf).await?;
        Ok(buf[0])
    }

    pub async fn verify_device(&mut self) -> Result<(), Error<B::Error>> {
        let id = self.who_am_i().await?;
        if id != L3GD20_DEVICE_ID {
            log::warn!("l3gd20@{:#04x}: unexpected WHO_AM_I {:#04x}", self.address, id);
            return Err(Error::WrongDevice(id));
        }
        Ok(())
    }
}
