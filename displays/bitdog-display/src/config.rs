//! Display configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default SSD1306 I2C address (SA0 low)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Alternate SSD1306 I2C address (SA0 high)
pub const ALTERNATE_ADDRESS: u8 = 0x3D;

/// Panel geometry and bus address
///
/// Fixed for the lifetime of a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// 7-bit I2C address
    pub address: u8,
    /// Width in pixel columns
    pub width: u8,
    /// Height in pixel rows (multiple of 8)
    pub height: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::SSD1306_128X64
    }
}

impl DisplayConfig {
    /// 0.96" 128x64 module, the panel fitted to the board
    pub const SSD1306_128X64: Self = Self {
        address: DEFAULT_ADDRESS,
        width: 128,
        height: 64,
    };

    /// 0.91" 128x32 module
    pub const SSD1306_128X32: Self = Self {
        address: DEFAULT_ADDRESS,
        width: 128,
        height: 32,
    };

    /// Same geometry on a different bus address
    pub const fn with_address(self, address: u8) -> Self {
        Self { address, ..self }
    }

    /// Number of 8-row pages
    pub const fn pages(&self) -> u8 {
        self.height / 8
    }
}
