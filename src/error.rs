//! Error types for L3GD20 operations.
//!
//! The same types serve the blocking and the async driver; they are generic
//! over the error of the underlying bus.

use core::fmt::{Debug, Formatter};

/// Error during initialization of sensor. Wraps [`Error`] and hands the bus back.
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct InitError<B, E> {
    pub bus: B,
    pub error: Error<E>,
}

impl<B, E> Debug for InitError<B, E>
where
    E: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        self.error.fmt(f)
    }
}

/// Error for sensor operations.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Error<E> {
    /// The bus could not complete a write or read
    Transport(E),
    /// A full-scale range byte outside {0x00, 0x10, 0x20}
    InvalidArgument(u8),
    /// A block read returned the wrong number of bytes
    Decode { expected: usize, actual: usize },
    /// WHO_AM_I did not read back as an L3GD20
    WrongDevice(u8),
}

/// A byte that does not name a [`GyroRange`](crate::gyro::GyroRange).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct InvalidRange(pub u8);

impl<E> From<InvalidRange> for Error<E> {
    fn from(value: InvalidRange) -> Self {
        Error::InvalidArgument(value.0)
    }
}
