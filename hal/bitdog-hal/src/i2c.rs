//! I2C bus abstractions
//!
//! The display controller is write-only from the driver's point of view,
//! so the bus trait only carries the write primitive.

/// I2C bus master
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// Blocks until the transfer completes.
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write, sent as one transaction
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;
}

impl<T: I2cBus + ?Sized> I2cBus for &mut T {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write(address, data)
    }
}

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::FAST
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self { frequency: 100_000 };

    /// Fast mode (400 kHz), what the panel's OLED runs at
    pub const FAST: Self = Self { frequency: 400_000 };

    /// Fast mode plus (1 MHz)
    pub const FAST_PLUS: Self = Self {
        frequency: 1_000_000,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingBus {
        writes: usize,
        last_address: u8,
    }

    impl I2cBus for CountingBus {
        type Error = ();

        fn write(&mut self, address: u8, _data: &[u8]) -> Result<(), ()> {
            self.writes += 1;
            self.last_address = address;
            Ok(())
        }
    }

    #[test]
    fn test_mut_ref_forwards_writes() {
        let mut bus = CountingBus {
            writes: 0,
            last_address: 0,
        };

        fn send<B: I2cBus>(mut b: B) {
            let _ = b.write(0x3C, &[0x80, 0xAF]);
        }

        send(&mut bus);
        send(&mut bus);
        assert_eq!(bus.writes, 2);
        assert_eq!(bus.last_address, 0x3C);
    }

    #[test]
    fn test_default_is_fast_mode() {
        assert_eq!(I2cConfig::default().frequency, 400_000);
        assert_eq!(I2cConfig::STANDARD.frequency, 100_000);
    }
}
