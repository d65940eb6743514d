//! Display backend trait
//!
//! The surface the input-handling layer draws through. Implemented by
//! [`Ssd1306`](crate::Ssd1306) and by test doubles.

/// Text-drawing display
///
/// Coordinates follow the driver's units: `x` in pixel columns, `y` in
/// pages of 8 pixel rows.
pub trait DisplayBackend {
    /// Blank the display (buffer and panel)
    fn clear(&mut self);

    /// Draw a single character and refresh the panel
    fn draw_char(&mut self, x: u8, y: u8, c: char);

    /// Draw a string, wrapping at the right edge, and refresh the panel once
    fn draw_string(&mut self, x: u8, y: u8, text: &str);

    /// Push the current buffer to the panel
    fn flush(&mut self);

    /// Panel size as (width, height) in pixels
    fn dimensions(&self) -> (u8, u8);

    /// Check if the display is ready
    fn is_ready(&self) -> bool;
}
