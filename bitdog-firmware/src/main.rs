//! BitDog front-panel firmware
//!
//! Drives the 128x64 SSD1306 OLED, the two push buttons and the green/blue
//! status LEDs of an RP2040 BitDog board. Characters typed on the UART0
//! console or the USB serial port are shown on the OLED; digits are queued
//! for the LED matrix.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::{UART0, USB};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_rp::usb::{Driver, InterruptHandler as UsbInterruptHandler};
use embassy_sync::mutex::Mutex;
use embassy_time::{Duration, Ticker};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use bitdog_core::{BoardConfig, Button, Panel};
use bitdog_display::Ssd1306;
use bitdog_hal_rp2040::{HalI2c, RpInput, RpOutput};

use crate::board::SharedPanel;

mod board;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    USBCTRL_IRQ => UsbInterruptHandler<USB>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

static PANEL: StaticCell<SharedPanel> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("BitDog firmware starting...");

    let config = BoardConfig::default();
    let p = embassy_rp::init(Default::default());

    // OLED on I2C1 (SDA GPIO14, SCL GPIO15)
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = config.i2c.frequency;
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config);

    let mut display = Ssd1306::new(HalI2c::new(i2c), config.display);
    if let Err(e) = display.init() {
        // Panel keeps running with the screen disabled
        error!("OLED init failed: {}", e);
    }

    let green = RpOutput::new(Output::new(p.PIN_11, Level::Low));
    let blue = RpOutput::new(Output::new(p.PIN_12, Level::Low));

    let mut panel = Panel::new(display, green, blue, &config.panel);
    panel.start();
    let panel: &'static SharedPanel = PANEL.init(Mutex::new(panel));
    info!("Panel ready");

    // Buttons pull to ground when pressed
    let button_a = RpInput::new(Input::new(p.PIN_5, Pull::Up));
    let button_b = RpInput::new(Input::new(p.PIN_6, Pull::Up));

    // Console on UART0 (TX GPIO0, RX GPIO1)
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = config.uart_baud;

    let tx_buf = TX_BUF.init([0u8; 64]);
    let rx_buf = RX_BUF.init([0u8; 64]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    // TX half is unused but must stay alive with the peripheral
    let (_tx, rx) = uart.split();

    // Console on USB CDC-ACM
    let (usb_device, usb_class) = tasks::usb::build(Driver::new(p.USB, Irqs));

    spawner
        .spawn(tasks::button_task(button_a, Button::A, panel))
        .unwrap();
    spawner
        .spawn(tasks::button_task(button_b, Button::B, panel))
        .unwrap();
    spawner.spawn(tasks::console_task(rx, panel)).unwrap();
    spawner.spawn(tasks::usb_device_task(usb_device)).unwrap();
    spawner
        .spawn(tasks::usb_console_task(usb_class, panel))
        .unwrap();

    info!("All tasks spawned");

    let mut ticker = Ticker::every(Duration::from_millis(config.poll_interval_ms as u64));
    loop {
        if let Some(digit) = panel.lock().await.take_matrix_update() {
            // LED matrix is not driven yet, the digit is only reported
            info!("LED matrix digit: {}", digit);
        }
        ticker.next().await;
    }
}
