//! UART console receive task
//!
//! Every byte received is shown on the OLED as a character.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use crate::board::SharedPanel;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 16;

/// Console task - forwards received bytes to the panel
#[embassy_executor::task]
pub async fn console_task(mut rx: BufferedUartRx, panel: &'static SharedPanel) {
    info!("Console task started");

    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) => {
                trace!("RX: {} bytes", n);
                let mut panel = panel.lock().await;
                for &byte in &buf[..n] {
                    panel.process_char(byte as char);
                }
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}
