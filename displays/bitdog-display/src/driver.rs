//! SSD1306 OLED Display Driver
//!
//! Driver for page-addressed SSD1306 panels over I2C. All drawing goes to
//! the in-memory [`Framebuffer`]; every flush sends the whole buffer as a
//! single data frame.
//!
//! # Lifecycle
//!
//! 1. [`Ssd1306::new()`] - no bus traffic
//! 2. [`Ssd1306::init()`] - allocates the framebuffer, then sends the setup
//!    sequence. If the buffer cannot be allocated nothing is sent and the
//!    driver stays not-ready.
//! 3. [`Ssd1306::clear()`] before first use; the buffer content after init
//!    is not guaranteed to match the panel.
//! 4. [`Ssd1306::draw_char()`] / [`Ssd1306::draw_string()`]
//!
//! Bus errors are logged and dropped. A draw call never fails.

use bitdog_hal::I2cBus;

use crate::backend::DisplayBackend;
use crate::command::{self, cmd, CONTROL_COMMAND, CONTROL_DATA};
use crate::config::DisplayConfig;
use crate::framebuffer::{Framebuffer, FramebufferError, MAX_BUFFER_SIZE};
use crate::glyph::{Font5x8, GlyphTable, GLYPH_ADVANCE, GLYPH_HEIGHT};

/// Data frame: control byte plus the largest framebuffer
const MAX_FRAME_SIZE: usize = MAX_BUFFER_SIZE + 1;

/// Display driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Framebuffer could not be allocated; the driver is unusable
    Framebuffer(FramebufferError),
}

impl From<FramebufferError> for DisplayError {
    fn from(e: FramebufferError) -> Self {
        DisplayError::Framebuffer(e)
    }
}

/// SSD1306 OLED driver
pub struct Ssd1306<B, F = Font5x8> {
    bus: B,
    address: u8,
    width: u8,
    height: u8,
    font: F,
    /// `None` until `init()` succeeds
    framebuffer: Option<Framebuffer>,
}

impl<B: I2cBus> Ssd1306<B> {
    /// Create a driver using the built-in font
    pub fn new(bus: B, config: DisplayConfig) -> Self {
        Self::with_font(bus, config, Font5x8)
    }
}

impl<B: I2cBus, F: GlyphTable> Ssd1306<B, F> {
    /// Create a driver with a custom glyph table
    pub fn with_font(bus: B, config: DisplayConfig, font: F) -> Self {
        Self {
            bus,
            address: config.address,
            width: config.width,
            height: config.height,
            font,
            framebuffer: None,
        }
    }

    /// Allocate the framebuffer and initialize the controller
    pub fn init(&mut self) -> Result<(), DisplayError> {
        let framebuffer = match Framebuffer::new(self.width, self.height) {
            Ok(fb) => fb,
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::error!(
                    "OLED framebuffer allocation failed for {}x{}: {}",
                    self.width,
                    self.height,
                    e
                );
                return Err(e.into());
            }
        };
        self.framebuffer = Some(framebuffer);

        for &c in &command::init_sequence(self.height) {
            self.command(c);
        }

        #[cfg(feature = "defmt")]
        defmt::info!(
            "OLED initialized at {=u8:#x} ({}x{})",
            self.address,
            self.width,
            self.height
        );

        Ok(())
    }

    /// Whether `init()` has allocated the framebuffer
    pub fn is_ready(&self) -> bool {
        self.framebuffer.is_some()
    }

    /// The framebuffer, once initialized
    pub fn framebuffer(&self) -> Option<&Framebuffer> {
        self.framebuffer.as_ref()
    }

    /// 7-bit bus address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the bus, dropping the framebuffer
    pub fn release(self) -> B {
        self.bus
    }

    /// Send a single command frame
    pub fn command(&mut self, command: u8) {
        if self.bus.write(self.address, &[CONTROL_COMMAND, command]).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("OLED command {=u8:#x} not acknowledged", command);
        }
    }

    /// Send the whole framebuffer as one data frame
    pub fn flush(&mut self) {
        let Some(fb) = self.framebuffer.as_ref() else {
            return;
        };

        let raw = fb.raw_bytes();
        let mut buf = [0u8; MAX_FRAME_SIZE];
        buf[0] = CONTROL_DATA;
        // Framebuffer::new caps raw.len() at MAX_BUFFER_SIZE
        buf[1..=raw.len()].copy_from_slice(raw);
        let frame = &buf[..=raw.len()];

        if self.bus.write(self.address, frame).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("OLED data frame ({} bytes) not acknowledged", frame.len());
        }
    }

    /// Zero the framebuffer and push it to the panel
    pub fn clear(&mut self) {
        let Some(fb) = self.framebuffer.as_mut() else {
            return;
        };
        fb.clear();
        self.flush();
    }

    /// Write the glyph for `c` with its left column at `x`, on page `page`
    ///
    /// Returns false if the font has no glyph for `c`.
    fn place_glyph(&mut self, x: usize, page: usize, c: char) -> bool {
        let Some(glyph) = self.font.lookup(c) else {
            return false;
        };
        let Some(fb) = self.framebuffer.as_mut() else {
            return false;
        };

        for (i, &column) in glyph.iter().enumerate() {
            // Columns past the right edge are dropped by the framebuffer
            fb.set_column(x + i, page, column);
        }
        true
    }

    /// Draw one character and flush
    ///
    /// - `x`: left column in pixels
    /// - `y`: page (8 pixel rows per unit)
    ///
    /// Characters without a glyph are ignored and cause no bus traffic.
    pub fn draw_char(&mut self, x: u8, y: u8, c: char) {
        if !self.is_ready() {
            return;
        }
        if self.place_glyph(x as usize, y as usize, c) {
            self.flush();
        } else {
            #[cfg(feature = "defmt")]
            defmt::trace!("No glyph for {=char}", c);
        }
    }

    /// Draw a string starting at `(x, y)` and flush once
    ///
    /// The cursor advances one glyph plus one spacing column per character,
    /// including characters without a glyph. When it reaches the right edge
    /// it returns to column 0 and moves down; once it passes the bottom the
    /// rest of the string is dropped.
    pub fn draw_string(&mut self, x: u8, y: u8, text: &str) {
        if !self.is_ready() {
            return;
        }

        let width = self.width as usize;
        let height = self.height as usize;
        let mut x = x as usize;
        let mut y = y as usize;

        for c in text.chars() {
            self.place_glyph(x, y, c);

            x += GLYPH_ADVANCE;
            if x >= width {
                x = 0;
                // `y` is placed as a page index but wraps by a glyph height
                // in pixel rows. On a 64-row panel every wrapped line lands
                // past the last page and is clipped.
                y += GLYPH_HEIGHT;
                if y >= height {
                    break;
                }
            }
        }

        self.flush();
    }

    /// Set the contrast level (0-255)
    pub fn set_contrast(&mut self, level: u8) {
        self.command(cmd::SET_CONTRAST);
        self.command(level);
    }

    /// Invert display colors
    pub fn set_inverted(&mut self, inverted: bool) {
        if inverted {
            self.command(cmd::SET_INVERSE);
        } else {
            self.command(cmd::SET_NORMAL);
        }
    }
}

impl<B: I2cBus, F: GlyphTable> DisplayBackend for Ssd1306<B, F> {
    fn clear(&mut self) {
        Ssd1306::clear(self);
    }

    fn draw_char(&mut self, x: u8, y: u8, c: char) {
        Ssd1306::draw_char(self, x, y, c);
    }

    fn draw_string(&mut self, x: u8, y: u8, text: &str) {
        Ssd1306::draw_string(self, x, y, text);
    }

    fn flush(&mut self) {
        Ssd1306::flush(self);
    }

    fn dimensions(&self) -> (u8, u8) {
        (self.width, self.height)
    }

    fn is_ready(&self) -> bool {
        Ssd1306::is_ready(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    /// Bus double that decodes and records every frame
    #[derive(Default)]
    struct RecordingBus {
        /// Payload byte of every command frame, in order
        commands: Vec<u8>,
        /// Payload of every data frame, in order
        data_frames: Vec<Vec<u8>>,
        addresses: Vec<u8>,
        fail: bool,
    }

    impl RecordingBus {
        fn writes(&self) -> usize {
            self.addresses.len()
        }
    }

    impl I2cBus for RecordingBus {
        type Error = ();

        fn write(&mut self, address: u8, data: &[u8]) -> Result<(), ()> {
            self.addresses.push(address);
            match data.split_first() {
                Some((&CONTROL_COMMAND, payload)) => {
                    assert_eq!(payload.len(), 1, "one command per frame");
                    self.commands.push(payload[0]);
                }
                Some((&CONTROL_DATA, payload)) => self.data_frames.push(payload.to_vec()),
                _ => panic!("unframed write: {:?}", data),
            }
            if self.fail {
                Err(())
            } else {
                Ok(())
            }
        }
    }

    fn config(width: u8, height: u8) -> DisplayConfig {
        DisplayConfig {
            address: 0x3C,
            width,
            height,
        }
    }

    /// Initialized driver with the init traffic discarded
    fn ready(width: u8, height: u8) -> Ssd1306<RecordingBus> {
        let mut display = Ssd1306::new(RecordingBus::default(), config(width, height));
        display.init().unwrap();
        display.bus = RecordingBus::default();
        display
    }

    fn glyph(c: char) -> [u8; 5] {
        Font5x8.lookup(c).unwrap()
    }

    #[test]
    fn test_new_sends_nothing() {
        let display = Ssd1306::new(RecordingBus::default(), DisplayConfig::default());
        assert!(!display.is_ready());
        assert_eq!(display.bus.writes(), 0);
    }

    #[test]
    fn test_init_sends_setup_sequence() {
        let mut display = Ssd1306::new(RecordingBus::default(), DisplayConfig::default());
        display.init().unwrap();

        assert!(display.is_ready());
        assert_eq!(
            display.bus.commands,
            [
                0xAE, 0x20, 0x00, 0x40, 0xA1, 0xC8, 0xA8, 0x3F, 0xD3, 0x00, 0xDA, 0x12, 0x81,
                0x7F, 0xA4, 0xA6, 0xD5, 0x80, 0x8D, 0x14, 0xAF,
            ]
        );
        assert_eq!(display.bus.writes(), 21);
        assert!(display.bus.data_frames.is_empty());
        assert!(display.bus.addresses.iter().all(|&a| a == 0x3C));
    }

    #[test]
    fn test_init_allocation_failure() {
        let mut display = Ssd1306::new(RecordingBus::default(), config(255, 255));
        assert_eq!(
            display.init(),
            Err(DisplayError::Framebuffer(FramebufferError::TooLarge))
        );
        assert!(!display.is_ready());

        // Unusable driver: every entry point is a no-op
        display.clear();
        display.draw_char(0, 0, 'A');
        display.draw_string(0, 0, "AB");
        display.flush();
        assert_eq!(display.bus.writes(), 0);
        assert!(display.framebuffer().is_none());
    }

    #[test]
    fn test_clear_flushes_zeroed_buffer() {
        let mut display = ready(128, 64);
        display.draw_char(0, 0, 'A');
        display.clear();

        assert_eq!(display.bus.data_frames.len(), 2);
        let last = display.bus.data_frames.last().unwrap();
        assert_eq!(last.len(), 1024);
        assert!(last.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_data_frame_matches_raw_bytes() {
        let mut display = ready(4, 16);
        {
            let fb = display.framebuffer.as_mut().unwrap();
            fb.set_column(0, 0, 0x01);
            fb.set_column(3, 0, 0x02);
            fb.set_column(1, 1, 0x03);
            fb.set_column(2, 1, 0x04);
        }
        display.flush();

        // Page 0 columns 0..4, then page 1 columns 0..4
        let expected: [u8; 8] = [0x01, 0x00, 0x00, 0x02, 0x00, 0x03, 0x04, 0x00];
        assert_eq!(display.bus.data_frames, [expected.to_vec()]);
        assert_eq!(
            display.bus.data_frames[0].as_slice(),
            display.framebuffer().unwrap().raw_bytes()
        );
    }

    #[test]
    fn test_flush_largest_framebuffer() {
        let mut display = ready(128, 128);
        {
            let fb = display.framebuffer.as_mut().unwrap();
            fb.set_column(0, 0, 0x11);
            fb.set_column(127, 15, 0x22);
        }
        display.flush();

        assert_eq!(display.bus.data_frames.len(), 1);
        let frame = &display.bus.data_frames[0];
        assert_eq!(frame.len(), MAX_BUFFER_SIZE);
        assert_eq!(frame[0], 0x11);
        assert_eq!(frame[MAX_BUFFER_SIZE - 1], 0x22);
        assert_eq!(
            frame.as_slice(),
            display.framebuffer().unwrap().raw_bytes()
        );
    }

    #[test]
    fn test_draw_char_places_glyph_and_flushes() {
        let mut display = ready(128, 64);
        display.draw_char(10, 2, 'A');

        let fb = display.framebuffer().unwrap();
        for (i, &col) in glyph('A').iter().enumerate() {
            assert_eq!(fb.column(10 + i, 2), Some(col));
        }
        assert_eq!(display.bus.data_frames.len(), 1);
        assert!(display.bus.commands.is_empty());
    }

    #[test]
    fn test_draw_char_unsupported_is_silent() {
        let mut display = ready(128, 64);
        let before = display.framebuffer().unwrap().clone();

        display.draw_char(0, 0, '!');

        assert_eq!(display.framebuffer().unwrap(), &before);
        assert_eq!(display.bus.writes(), 0);
    }

    #[test]
    fn test_draw_char_clips_right_edge() {
        let mut display = ready(128, 64);
        display.draw_char(126, 0, 'A');

        let fb = display.framebuffer().unwrap();
        let a = glyph('A');
        assert_eq!(fb.column(126, 0), Some(a[0]));
        assert_eq!(fb.column(127, 0), Some(a[1]));
        // Nothing wrapped onto the next page
        assert!(fb.raw_bytes()[128..].iter().all(|&b| b == 0));
        assert_eq!(fb.raw_bytes()[..126].iter().filter(|&&b| b != 0).count(), 0);

        assert_eq!(display.bus.data_frames.len(), 1);
        assert_eq!(display.bus.data_frames[0].len(), 1024);
    }

    #[test]
    fn test_draw_char_fully_clipped_still_flushes() {
        let mut display = ready(128, 64);
        display.draw_char(200, 0, 'A');
        display.draw_char(0, 9, 'B');

        assert!(display.framebuffer().unwrap().raw_bytes().iter().all(|&b| b == 0));
        assert_eq!(display.bus.data_frames.len(), 2);
    }

    #[test]
    fn test_draw_string_spacing_and_single_flush() {
        let mut display = ready(128, 64);
        display.draw_string(0, 0, "AB");

        let fb = display.framebuffer().unwrap();
        let (a, b) = (glyph('A'), glyph('B'));
        for i in 0..5 {
            assert_eq!(fb.column(i, 0), Some(a[i]));
            assert_eq!(fb.column(6 + i, 0), Some(b[i]));
        }
        // Spacing column stays blank
        assert_eq!(fb.column(5, 0), Some(0));
        assert_eq!(display.bus.data_frames.len(), 1);
        assert_eq!(display.bus.writes(), 1);
    }

    #[test]
    fn test_draw_string_skips_unsupported_but_advances() {
        let mut display = ready(128, 64);
        display.draw_string(0, 0, "A B");

        let fb = display.framebuffer().unwrap();
        assert!(fb.raw_bytes()[6..12].iter().all(|&b| b == 0));
        assert_eq!(fb.column(12, 0), Some(glyph('B')[0]));
        assert_eq!(display.bus.data_frames.len(), 1);
    }

    #[test]
    fn test_draw_string_truncates_past_bottom() {
        // 12 columns fit two glyphs per line; 16 rows wrap twice at most
        let mut long = ready(12, 16);
        long.draw_string(0, 0, "ABCDEFGH");

        let mut prefix = ready(12, 16);
        prefix.draw_string(0, 0, "AB");

        assert_eq!(
            long.framebuffer().unwrap().raw_bytes(),
            prefix.framebuffer().unwrap().raw_bytes()
        );
        assert_eq!(long.bus.data_frames.len(), 1);
    }

    #[test]
    fn test_draw_string_wrap_advances_in_pixel_rows() {
        // 128 rows = 16 pages, so the first wrap (y = 8) is still on screen
        let mut display = ready(12, 128);
        display.draw_string(0, 0, "ABC");

        let fb = display.framebuffer().unwrap();
        assert_eq!(fb.column(0, 0), Some(glyph('A')[0]));
        assert_eq!(fb.column(6, 0), Some(glyph('B')[0]));
        for page in 1..8 {
            assert!((0..12).all(|x| fb.column(x, page) == Some(0)));
        }
        for (i, &col) in glyph('C').iter().enumerate() {
            assert_eq!(fb.column(i, 8), Some(col));
        }
        assert_eq!(display.bus.data_frames.len(), 1);
    }

    #[test]
    fn test_draw_string_flushes_even_when_truncated() {
        let mut display = ready(6, 8);
        display.draw_string(0, 0, "ABC");

        // One glyph per line; the first wrap leaves the 8-row panel
        let raw = display.framebuffer().unwrap().raw_bytes();
        assert_eq!(&raw[..5], &glyph('A')[..]);
        assert_eq!(raw[5], 0);
        assert_eq!(display.bus.data_frames.len(), 1);
    }

    #[test]
    fn test_bus_errors_are_not_fatal() {
        let mut display = ready(128, 64);
        display.bus.fail = true;

        display.draw_char(0, 0, 'A');
        display.clear();

        assert!(display.is_ready());
        assert_eq!(display.bus.data_frames.len(), 2);
    }

    #[test]
    fn test_single_commands() {
        let mut display = ready(128, 64);
        display.set_contrast(0xCF);
        display.set_inverted(true);
        display.set_inverted(false);

        assert_eq!(display.bus.commands, [0x81, 0xCF, 0xA7, 0xA6]);
        assert!(display.bus.data_frames.is_empty());
    }

    #[test]
    fn test_backend_trait() {
        fn greet<D: DisplayBackend>(d: &mut D) {
            assert!(d.is_ready());
            d.clear();
            d.draw_string(0, 0, "Hi");
        }

        let mut display = ready(128, 64);
        greet(&mut display);

        assert_eq!(DisplayBackend::dimensions(&display), (128, 64));
        assert_eq!(display.bus.data_frames.len(), 2);
        assert_eq!(
            display.framebuffer().unwrap().column(0, 0),
            Some(glyph('H')[0])
        );
    }

    #[test]
    fn test_release_returns_bus() {
        let mut display = ready(128, 64);
        display.draw_char(0, 0, '1');
        let bus = display.release();
        assert_eq!(bus.data_frames.len(), 1);
    }
}
