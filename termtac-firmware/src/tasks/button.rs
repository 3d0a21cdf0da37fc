//! Button task
//!
//! Waits for a falling edge (buttons are active-low with pull-ups),
//! debounces it and latches the press.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Timer};
use termtac_core::traits::Button;

use crate::buttons;

/// Time the pin must stay low to count as a press
const DEBOUNCE_MS: u64 = 20;

/// Button task - one instance per button
#[embassy_executor::task(pool_size = 4)]
pub async fn button_task(mut pin: Input<'static>, button: Button) {
    info!("Button task started: {:?}", button);

    loop {
        pin.wait_for_falling_edge().await;
        Timer::after(Duration::from_millis(DEBOUNCE_MS)).await;

        if pin.is_low() {
            debug!("Press: {:?}", button);
            buttons::latch(button);
            pin.wait_for_high().await;
        }
    }
}
