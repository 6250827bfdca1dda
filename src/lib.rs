#![cfg_attr(not(test), no_std)]

pub mod address;
pub mod bus;
pub mod config;
pub mod error;
pub mod gyro;
pub mod registers;
pub mod sensor;
pub mod sensor_async;

#[cfg(test)]
mod mock;

pub use gyro::{RANGE_2000DPS, RANGE_250DPS, RANGE_500DPS};

/// Value of the WHO_AM_I register on an L3GD20.
pub const L3GD20_DEVICE_ID: u8 = 0xD4;
