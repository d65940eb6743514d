//! Buttons and the status LEDs they control

/// Front-panel push buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Left button, toggles the green LED
    A,
    /// Right button, toggles the blue LED
    B,
}

impl Button {
    /// The LED this button toggles
    pub fn led(self) -> StatusLed {
        match self {
            Button::A => StatusLed::Green,
            Button::B => StatusLed::Blue,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Button::A => 0,
            Button::B => 1,
        }
    }
}

/// Status LED channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusLed {
    Green,
    Blue,
}
