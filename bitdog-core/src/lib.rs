//! Board-agnostic logic for the BitDog OLED panel
//!
//! This crate contains everything between the hardware traits and the
//! firmware's tasks:
//!
//! - Board configuration defaults
//! - Button debouncing
//! - The [`Panel`] context, which owns the display and status LEDs and
//!   turns button presses and console characters into screen updates
//!
//! Nothing here touches hardware directly; the firmware injects
//! implementations of the `bitdog-hal` traits and serializes access.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod input;
pub mod panel;

pub use config::{BoardConfig, PanelConfig, StatusLabels};
pub use input::{Button, Debouncer, StatusLed};
pub use panel::Panel;
