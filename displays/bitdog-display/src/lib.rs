//! SSD1306 display driver for the BitDog OLED panel
//!
//! This crate provides:
//! - [`Framebuffer`], a page-addressed mirror of the controller's video RAM
//! - [`GlyphTable`] and the built-in [`Font5x8`] column-bitmap font
//! - [`Ssd1306`], the I2C driver: init sequence, command/data framing,
//!   full-buffer flush and text layout
//! - [`DisplayBackend`], the trait the input layer draws through
//!
//! # Wire format
//!
//! Every transfer to the controller starts with a control byte:
//!
//! ```text
//! ┌──────┬─────────┐      ┌──────┬──────────────────────────────┐
//! │ 0x80 │ command │      │ 0x40 │ pages * width framebuffer    │
//! └──────┴─────────┘      └──────┴──────────────────────────────┘
//!   command frame           data frame (one per flush)
//! ```
//!
//! # Features
//!
//! - **`defmt`** - log driver activity and derive [`defmt::Format`] on public types
//! - **`serde`** - derive `Serialize`/`Deserialize` on [`DisplayConfig`]

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod backend;
pub mod command;
pub mod config;
pub mod driver;
mod font;
pub mod framebuffer;
pub mod glyph;

pub use backend::DisplayBackend;
pub use config::{DisplayConfig, DEFAULT_ADDRESS};
pub use driver::{DisplayError, Ssd1306};
pub use framebuffer::{Framebuffer, FramebufferError, MAX_BUFFER_SIZE, PAGE_HEIGHT};
pub use glyph::{Font5x8, Glyph, GlyphTable, GLYPH_ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH};
