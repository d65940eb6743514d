//! Front-panel context
//!
//! [`Panel`] owns the display and the two status LEDs together with all
//! the state the input handlers need: LED states, per-button debouncers
//! and the digit waiting to be shown on the LED matrix. Callers hand it
//! events; they never touch the display or pins directly.
//!
//! The panel is not internally synchronized. When buttons and the console
//! run in separate tasks, the firmware keeps it behind a mutex.

use bitdog_display::DisplayBackend;
use bitdog_hal::OutputPin;

use crate::config::{PanelConfig, StatusLabels};
use crate::input::{Button, Debouncer, StatusLed};

/// Display, LEDs and input state of the board
pub struct Panel<D, P> {
    display: D,
    green: P,
    blue: P,
    green_on: bool,
    blue_on: bool,
    debouncers: [Debouncer; 2],
    labels: StatusLabels,
    /// Digit received on the console, not yet shown on the matrix
    pending_digit: Option<u8>,
}

impl<D: DisplayBackend, P: OutputPin> Panel<D, P> {
    /// Take ownership of an initialized display and both LED pins
    ///
    /// Both LEDs are switched off.
    pub fn new(display: D, mut green: P, mut blue: P, config: &PanelConfig) -> Self {
        green.set_low();
        blue.set_low();
        Self {
            display,
            green,
            blue,
            green_on: false,
            blue_on: false,
            debouncers: [Debouncer::new(config.debounce_ms); 2],
            labels: config.labels,
            pending_digit: None,
        }
    }

    /// Blank the screen
    pub fn start(&mut self) {
        if !self.display.is_ready() {
            #[cfg(feature = "defmt")]
            defmt::warn!("Display not ready, screen updates disabled");
            return;
        }
        self.display.clear();
    }

    /// Handle a falling edge on `button` at `now_ms` since boot
    ///
    /// Returns the new LED state, or `None` if the edge was a bounce.
    pub fn handle_button(&mut self, button: Button, now_ms: u32) -> Option<bool> {
        if !self.debouncers[button.index()].accept(now_ms) {
            return None;
        }

        let led = button.led();
        let (state, pin) = match led {
            StatusLed::Green => (&mut self.green_on, &mut self.green),
            StatusLed::Blue => (&mut self.blue_on, &mut self.blue),
        };
        *state = !*state;
        let on = *state;
        pin.set_state(on);

        #[cfg(feature = "defmt")]
        defmt::info!("Button {}: {} LED {}", button, led, if on { "ON" } else { "OFF" });

        self.display.clear();
        self.display.draw_string(0, 0, self.labels.get(led, on));

        Some(on)
    }

    /// Show a character received on the console
    ///
    /// The screen is cleared and `c` drawn in the top-left corner. Digits
    /// are also queued for the LED matrix. Control characters (line
    /// endings from terminals) are ignored.
    pub fn process_char(&mut self, c: char) {
        if c.is_ascii_control() {
            return;
        }

        self.display.clear();
        self.display.draw_char(0, 0, c);

        #[cfg(feature = "defmt")]
        defmt::info!("Received: {=char}", c);

        if let Some(digit) = c.to_digit(10) {
            self.pending_digit = Some(digit as u8);
        }
    }

    /// Take the digit waiting for the LED matrix, if any
    pub fn take_matrix_update(&mut self) -> Option<u8> {
        self.pending_digit.take()
    }

    /// Current state of a status LED
    pub fn led_state(&self, led: StatusLed) -> bool {
        match led {
            StatusLed::Green => self.green_on,
            StatusLed::Blue => self.blue_on,
        }
    }

    /// The owned display
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Mutable access to the owned display
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Give back the display and the (green, blue) LED pins
    pub fn release(self) -> (D, P, P) {
        (self.display, self.green, self.blue)
    }
}
