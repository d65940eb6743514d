//! Concrete panel types for the BitDog board

use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;

use bitdog_core::Panel;
use bitdog_display::Ssd1306;
use bitdog_hal_rp2040::{HalI2c, RpOutput};

/// OLED bus: I2C1 in blocking mode
pub type OledBus = HalI2c<I2c<'static, I2C1, Blocking>>;

pub type BoardPanel = Panel<Ssd1306<OledBus>, RpOutput>;

/// Panel shared by the button and console tasks
pub type SharedPanel = Mutex<CriticalSectionRawMutex, BoardPanel>;
