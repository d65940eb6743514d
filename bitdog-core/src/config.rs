//! Configuration types
//!
//! Defaults describe the stock board. Pin assignments are fixed by the
//! board and live in the firmware.

use bitdog_display::DisplayConfig;
use bitdog_hal::I2cConfig;

use crate::input::StatusLed;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Text drawn on the OLED after a status LED changes
///
/// Labels are compiled in; a deserialized config keeps the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct StatusLabels {
    pub green_on: &'static str,
    pub green_off: &'static str,
    pub blue_on: &'static str,
    pub blue_off: &'static str,
}

impl StatusLabels {
    /// Labels of the stock BitDog firmware
    pub const PORTUGUESE: Self = Self {
        green_on: "Verde ON",
        green_off: "Verde OFF",
        blue_on: "Azul ON",
        blue_off: "Azul OFF",
    };

    pub const ENGLISH: Self = Self {
        green_on: "Green ON",
        green_off: "Green OFF",
        blue_on: "Blue ON",
        blue_off: "Blue OFF",
    };

    /// Label for `led` in state `on`
    pub fn get(&self, led: StatusLed, on: bool) -> &'static str {
        match (led, on) {
            (StatusLed::Green, true) => self.green_on,
            (StatusLed::Green, false) => self.green_off,
            (StatusLed::Blue, true) => self.blue_on,
            (StatusLed::Blue, false) => self.blue_off,
        }
    }
}

impl Default for StatusLabels {
    fn default() -> Self {
        Self::PORTUGUESE
    }
}

/// Input-handling settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelConfig {
    /// Minimum time between two accepted presses of one button
    pub debounce_ms: u32,
    /// Status text per LED state
    #[cfg_attr(feature = "serde", serde(skip_deserializing))]
    pub labels: StatusLabels,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 200,
            labels: StatusLabels::default(),
        }
    }
}

/// Complete board configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardConfig {
    /// OLED geometry and address
    pub display: DisplayConfig,
    /// Button handling
    pub panel: PanelConfig,
    /// OLED bus settings
    pub i2c: I2cConfig,
    /// Console UART baud rate
    pub uart_baud: u32,
    /// Main loop period in milliseconds
    pub poll_interval_ms: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            panel: PanelConfig::default(),
            i2c: I2cConfig::FAST,
            uart_baud: 115_200,
            poll_interval_ms: 40,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.display.address, 0x3C);
        assert_eq!(config.display.width, 128);
        assert_eq!(config.display.height, 64);
        assert_eq!(config.panel.debounce_ms, 200);
        assert_eq!(config.i2c.frequency, 400_000);
        assert_eq!(config.uart_baud, 115_200);
        assert_eq!(config.poll_interval_ms, 40);
        assert_eq!(config.panel.labels, StatusLabels::PORTUGUESE);
    }

    #[test]
    fn test_status_labels() {
        let labels = StatusLabels::default();
        assert_eq!(labels.get(StatusLed::Green, true), "Verde ON");
        assert_eq!(labels.get(StatusLed::Green, false), "Verde OFF");
        assert_eq!(labels.get(StatusLed::Blue, true), "Azul ON");
        assert_eq!(labels.get(StatusLed::Blue, false), "Azul OFF");

        assert_eq!(StatusLabels::ENGLISH.get(StatusLed::Blue, false), "Blue OFF");
    }
}
