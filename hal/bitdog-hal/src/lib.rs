//! BitDog Hardware Abstraction Layer
//!
//! This crate defines the capability traits the display driver and the
//! input-handling context are written against. Board crates implement
//! them on top of their chip HAL; host tests implement them with fakes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  bitdog-firmware (RP2040 binary)        │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  bitdog-core  │──────▶│bitdog-display │
//! └───────────────┘       └───────────────┘
//!         │                       │
//!         └───────────┬───────────┘
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  bitdog-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     ▲
//! ┌─────────────────────────────────────────┐
//! │  bitdog-hal-rp2040 (embassy-rp impls)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`i2c::I2cBus`] - I2C bus writes

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod i2c;

pub use gpio::{InputPin, OutputPin};
pub use i2c::{I2cBus, I2cConfig};
