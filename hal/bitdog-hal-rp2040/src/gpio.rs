//! GPIO adapters for LEDs and push buttons

use bitdog_hal::{InputPin, OutputPin};
use embassy_rp::gpio::{Input, Output};

/// Push-pull output driving an LED
pub struct RpOutput {
    pin: Output<'static>,
}

impl RpOutput {
    pub fn new(pin: Output<'static>) -> Self {
        Self { pin }
    }
}

impl OutputPin for RpOutput {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

/// Active-low push button with the internal pull-up enabled
pub struct RpInput {
    pin: Input<'static>,
}

impl RpInput {
    pub fn new(pin: Input<'static>) -> Self {
        Self { pin }
    }

    /// Wait for the next press (falling edge)
    pub async fn wait_for_press(&mut self) {
        self.pin.wait_for_falling_edge().await;
    }
}

impl InputPin for RpInput {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}
