//! Debug UART adapter
//!
//! Wraps the Embassy blocking UART transmitter so the terminal renderer can
//! write through the `termtac-hal` trait.

use embassy_rp::uart::{self, Blocking, UartTx};
use termtac_hal::uart::{DataBits, Parity, StopBits, UartConfig};

/// Transmit half of the debug UART
pub struct DebugUart {
    tx: UartTx<'static, Blocking>,
}

impl DebugUart {
    pub fn new(tx: UartTx<'static, Blocking>) -> Self {
        Self { tx }
    }
}

impl termtac_hal::UartTx for DebugUart {
    type Error = uart::Error;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.tx.blocking_write(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.tx.blocking_flush()
    }
}

/// Map the board-agnostic UART settings onto the RP2040 driver config
pub fn rp_config(config: &UartConfig) -> uart::Config {
    let mut cfg = uart::Config::default();
    cfg.baudrate = config.baudrate;
    cfg.data_bits = match config.data_bits {
        DataBits::Seven => uart::DataBits::DataBits7,
        DataBits::Eight => uart::DataBits::DataBits8,
    };
    cfg.parity = match config.parity {
        Parity::None => uart::Parity::ParityNone,
        Parity::Even => uart::Parity::ParityEven,
        Parity::Odd => uart::Parity::ParityOdd,
    };
    cfg.stop_bits = match config.stop_bits {
        StopBits::One => uart::StopBits::STOP1,
        StopBits::Two => uart::StopBits::STOP2,
    };
    cfg
}
