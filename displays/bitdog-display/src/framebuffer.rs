//! Page-addressed framebuffer
//!
//! Mirrors the SSD1306 video RAM in horizontal addressing mode. The buffer
//! is split into pages of 8 pixel rows; each byte holds one column of a
//! page, with bit `n` being pixel row `page * 8 + n`:
//!
//! ```text
//!            x = 0    x = 1         x = width-1
//! page 0   [ byte 0 | byte 1 | ... | byte w-1   ]
//! page 1   [ byte w | ...                       ]
//! ```
//!
//! The linear index of `(x, page)` is `x + page * width`, which is also the
//! order the controller expects the bytes on the wire.

use heapless::Vec;

/// Pixel rows per page
pub const PAGE_HEIGHT: u8 = 8;

/// Largest buffer the driver can hold (128x128 pixels)
pub const MAX_BUFFER_SIZE: usize = 2048;

/// Errors raised while allocating a framebuffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FramebufferError {
    /// Width is zero or height is below one page
    InvalidDimensions,
    /// `pages * width` does not fit in [`MAX_BUFFER_SIZE`]
    TooLarge,
}

/// In-memory copy of the display RAM
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    width: u8,
    height: u8,
    pages: u8,
    buffer: Vec<u8, MAX_BUFFER_SIZE>,
}

impl Framebuffer {
    /// Allocate a zeroed framebuffer for a `width` x `height` pixel display
    ///
    /// `height` is truncated to whole pages.
    pub fn new(width: u8, height: u8) -> Result<Self, FramebufferError> {
        let pages = height / PAGE_HEIGHT;
        if width == 0 || pages == 0 {
            return Err(FramebufferError::InvalidDimensions);
        }

        let mut buffer = Vec::new();
        buffer
            .resize(pages as usize * width as usize, 0)
            .map_err(|_| FramebufferError::TooLarge)?;

        Ok(Self {
            width,
            height,
            pages,
            buffer,
        })
    }

    /// Width in pixel columns
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Height in pixel rows
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Number of 8-row pages
    pub fn pages(&self) -> u8 {
        self.pages
    }

    /// Zero every byte. The physical display is untouched until a flush.
    pub fn clear(&mut self) {
        self.buffer.fill(0);
    }

    fn index(&self, x: usize, page: usize) -> Option<usize> {
        if x < self.width as usize && page < self.pages as usize {
            Some(x + page * self.width as usize)
        } else {
            None
        }
    }

    /// Write one column byte at `(x, page)`
    ///
    /// Coordinates outside the buffer are dropped without wrapping.
    pub fn set_column(&mut self, x: usize, page: usize, byte: u8) {
        if let Some(idx) = self.index(x, page) {
            self.buffer[idx] = byte;
        }
    }

    /// Read the column byte at `(x, page)`
    pub fn column(&self, x: usize, page: usize) -> Option<u8> {
        self.index(x, page).map(|idx| self.buffer[idx])
    }

    /// Buffer contents, page 0 first, columns left to right within a page
    pub fn raw_bytes(&self) -> &[u8] {
        &self.buffer
    }
}
