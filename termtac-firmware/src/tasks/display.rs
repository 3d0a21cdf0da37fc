//! Display task
//!
//! Owns the controller and runs one state per tick. Transport failures are
//! logged; the controller faults on its own once the terminal keeps failing.

use defmt::*;
use embassy_time::{Duration, Ticker};
use termtac_core::traits::SerialTerminal;
use termtac_core::Controller;

use crate::buttons::LatchedButtons;
use crate::serial::DebugUart;

/// Tick interval in milliseconds
pub const TICK_INTERVAL_MS: u64 = 1;

/// Display task - steps the tic-tac-toe controller
#[embassy_executor::task]
pub async fn display_task(uart: DebugUart) {
    info!("Display task started");

    let mut controller = Controller::new(SerialTerminal::new(uart), LatchedButtons);
    if let Err(e) = controller.initialize() {
        warn!("Failed to write banner: {:?}", e);
    }

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));

    loop {
        ticker.next().await;

        let before = controller.state();
        if let Err(e) = controller.run_active_state() {
            warn!("Display tick failed: {:?}", e);
        }

        let after = controller.state();
        if before != after {
            info!("State: {:?} -> {:?}", before, after);
        }
    }
}
