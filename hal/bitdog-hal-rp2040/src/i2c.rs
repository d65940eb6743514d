//! I2C bus adapter

use bitdog_hal::I2cBus;

/// Wraps an `embedded-hal` I2C controller, e.g. `embassy_rp::i2c::I2c`
/// in blocking mode
pub struct HalI2c<I> {
    inner: I,
}

impl<I: embedded_hal::i2c::I2c> HalI2c<I> {
    pub fn new(inner: I) -> Self {
        Self { inner }
    }

    /// Give back the wrapped controller
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: embedded_hal::i2c::I2c> I2cBus for HalI2c<I> {
    type Error = I::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.inner.write(address, data)
    }
}
