//! Register-level bus capability.
//!
//! The driver only ever needs two things from its transport: write a block of
//! bytes starting at a register, and read a block of bytes starting at a
//! register. [`RegisterBus`] and [`AsyncRegisterBus`] capture exactly that, so a
//! simulator or an SMBus-style adapter can drive the sensor without pretending
//! to be a full I2C peripheral.
//!
//! Every `embedded-hal` I2C bus already provides the capability through the
//! blanket implementations below.

use core::fmt::Debug;

use embedded_hal::i2c::{I2c, Operation};
use embedded_hal_async::i2c::I2c as AsyncI2c;

/// Blocking register access on a two-wire bus.
pub trait RegisterBus {
    type Error: Debug;

    /// Write `data` to consecutive registers starting at `register`.
    fn write_block(&mut self, address: u8, register: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Fill `buf` from consecutive registers starting at `register`.
    ///
    /// Returns how many bytes the transport actually delivered.
    fn read_block(&mut self, address: u8, register: u8, buf: &mut [u8])
        -> Result<usize, Self::Error>;
}

/// Async counterpart of [`RegisterBus`].
#[allow(async_fn_in_trait)]
pub trait AsyncRegisterBus {
    type Error: Debug;

    /// Write `data` to consecutive registers starting at `register`.
    async fn write_block(
        &mut self,
        address: u8,
        register: u8,
        data: &[u8],
    ) -> Result<(), Self::Error>;

    /// Fill `buf` from consecutive registers starting at `register`.
    ///
    /// Returns how many bytes the transport actually delivered.
    async fn read_block(
        &mut self,
        address: u8,
        register: u8,
        buf: &mut [u8],
    ) -> Result<usize, Self::Error>;
}

// Adjacent write operations go out back to back without a repeated start, so
// the register byte and the payload form a single write frame.
impl<I> RegisterBus for I
where
    I: I2c,
{
    type Error = I::Error;

    fn write_block(&mut self, address: u8, register: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.transaction(
            address,
            &mut [Operation::Write(&[register]), Operation::Write(data)],
        )
    }

    fn read_block(
        &mut self,
        address: u8,
        register: u8,
        buf: &mut [u8],
    ) -> Result<usize, Self::Error> {
        self.write_read(address, &[register], buf)?;
        Ok(buf.len())
    }
}

impl<I> AsyncRegisterBus for I
where
    I: AsyncI2c,
{
    type Error = I::Error;

    async fn write_block(
        &mut self,
        address: u8,
        register: u8,
        data: &[u8],
    ) -> Result<(), Self::Error> {
        self.transaction(
            address,
            &mut [Operation::Write(&[register]), Operation::Write(data)],
        )
        .await
    }

    async fn read_block(
        &mut self,
        address: u8,
        register: u8,
        buf: &mut [u8],
    ) -> Result<usize, Self::Error> {
        self.write_read(address, &[register], buf).await?;
        Ok(buf.len())
    }
}
