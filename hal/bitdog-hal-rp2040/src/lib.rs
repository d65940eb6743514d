//! RP2040 implementations of the `bitdog-hal` traits
//!
//! - [`HalI2c`]: any `embedded-hal` 1.0 I2C controller as an [`I2cBus`]
//! - [`RpOutput`] / [`RpInput`]: embassy-rp GPIO as LED and button pins
//!
//! [`I2cBus`]: bitdog_hal::I2cBus

#![no_std]

pub mod gpio;
pub mod i2c;

pub use gpio::{RpInput, RpOutput};
pub use i2c::HalI2c;
