//! Push-button tasks

use defmt::*;
use embassy_time::Instant;

use bitdog_core::Button;
use bitdog_hal::InputPin;
use bitdog_hal_rp2040::RpInput;

use crate::board::SharedPanel;

/// Button task - one instance per button, feeds presses to the panel
#[embassy_executor::task(pool_size = 2)]
pub async fn button_task(mut pin: RpInput, button: Button, panel: &'static SharedPanel) {
    info!("Button {} task started", button);

    loop {
        pin.wait_for_press().await;
        // Noise spike: the line is already back up
        if !pin.is_low() {
            trace!("Button {}: released before sampling", button);
            continue;
        }

        let now_ms = Instant::now().as_millis() as u32;
        if panel.lock().await.handle_button(button, now_ms).is_none() {
            trace!("Button {}: bounce ignored", button);
        }
    }
}
