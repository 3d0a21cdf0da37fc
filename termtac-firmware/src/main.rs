//! termtac - tic-tac-toe terminal display firmware
//!
//! Draws the game board on a serial terminal attached to UART0 and turns
//! the four local buttons into board updates.
//!
//! **Size the terminal window to 17 x 14.**

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::uart::UartTx;
use termtac_core::traits::Button;
use termtac_hal::UartConfig;
use {defmt_rtt as _, panic_probe as _};

mod buttons;
mod serial;
mod tasks;

use crate::serial::{rp_config, DebugUart};

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("termtac firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Debug terminal on UART0 TX (GPIO0)
    let uart_config = UartConfig::default();
    let tx = UartTx::new_blocking(p.UART0, p.PIN_0, rp_config(&uart_config));
    info!("Terminal UART initialized at {} baud", uart_config.baudrate);

    // Buttons are active-low on GPIO10-13
    let button_pins = [
        (Input::new(p.PIN_10, Pull::Up), Button::B0),
        (Input::new(p.PIN_11, Pull::Up), Button::B1),
        (Input::new(p.PIN_12, Pull::Up), Button::B2),
        (Input::new(p.PIN_13, Pull::Up), Button::B3),
    ];

    for (pin, button) in button_pins {
        spawner.spawn(tasks::button_task(pin, button)).unwrap();
    }
    spawner
        .spawn(tasks::display_task(DebugUart::new(tx)))
        .unwrap();

    info!("All tasks spawned, firmware running");
}
