//! USB CDC-ACM console
//!
//! The board enumerates as a serial port like a Pico running the SDK's
//! stdio-over-USB; bytes typed into it reach the panel exactly like UART
//! console input.

use defmt::*;
use embassy_rp::peripherals::USB;
use embassy_rp::usb::Driver;
use embassy_usb::class::cdc_acm::{CdcAcmClass, State};
use embassy_usb::driver::EndpointError;
use embassy_usb::{Builder, Config, UsbDevice};
use static_cell::StaticCell;

use crate::board::SharedPanel;

pub type UsbDriver = Driver<'static, USB>;

/// Full-speed bulk packet size
const MAX_PACKET_SIZE: u16 = 64;

/// Raspberry Pi vendor ID with the Pico SDK CDC product ID
const USB_VID: u16 = 0x2E8A;
const USB_PID: u16 = 0x000A;

// Descriptor and control buffers (must live forever)
static CONFIG_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static BOS_DESCRIPTOR: StaticCell<[u8; 256]> = StaticCell::new();
static CONTROL_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static CDC_STATE: StaticCell<State<'static>> = StaticCell::new();

/// Build the USB device with a single CDC-ACM interface
pub fn build(driver: UsbDriver) -> (UsbDevice<'static, UsbDriver>, CdcAcmClass<'static, UsbDriver>) {
    let mut config = Config::new(USB_VID, USB_PID);
    config.manufacturer = Some("BitDog");
    config.product = Some("BitDog console");
    config.max_power = 100;
    config.max_packet_size_0 = MAX_PACKET_SIZE as u8;

    let mut builder = Builder::new(
        driver,
        config,
        CONFIG_DESCRIPTOR.init([0u8; 256]),
        BOS_DESCRIPTOR.init([0u8; 256]),
        &mut [], // no Microsoft OS descriptors
        CONTROL_BUF.init([0u8; 64]),
    );

    let class = CdcAcmClass::new(&mut builder, CDC_STATE.init(State::new()), MAX_PACKET_SIZE);
    (builder.build(), class)
}

/// USB device task - runs enumeration and control transfers
#[embassy_executor::task]
pub async fn usb_device_task(mut device: UsbDevice<'static, UsbDriver>) -> ! {
    device.run().await
}

/// USB console task - forwards received bytes to the panel
#[embassy_executor::task]
pub async fn usb_console_task(mut class: CdcAcmClass<'static, UsbDriver>, panel: &'static SharedPanel) {
    info!("USB console task started");

    let mut buf = [0u8; MAX_PACKET_SIZE as usize];

    loop {
        class.wait_connection().await;
        info!("USB console connected");

        loop {
            match class.read_packet(&mut buf).await {
                Ok(n) => {
                    trace!("USB RX: {} bytes", n);
                    let mut panel = panel.lock().await;
                    for &byte in &buf[..n] {
                        panel.process_char(byte as char);
                    }
                }
                Err(EndpointError::Disabled) => {
                    info!("USB console disconnected");
                    break;
                }
                Err(e) => {
                    warn!("USB read error: {:?}", e);
                }
            }
        }
    }
}
