//! Terminal transport trait

use termtac_hal::UartTx;

use crate::error::TermError;

/// Byte sink for the display terminal
///
/// Bytes written in one call reach the terminal in order. Interleaving with
/// other writers between calls is the transport owner's concern.
pub trait Terminal {
    /// Write raw bytes (text and escape sequences)
    fn write(&mut self, bytes: &[u8]) -> Result<(), TermError>;

    /// Write a string
    fn write_str(&mut self, text: &str) -> Result<(), TermError> {
        self.write(text.as_bytes())
    }

    /// Stop treating terminal input as debug commands
    ///
    /// Transports without a command interpreter have nothing to switch off.
    fn set_passthrough(&mut self) -> Result<(), TermError> {
        Ok(())
    }

    /// Block until buffered bytes have left the transport
    fn flush(&mut self) -> Result<(), TermError> {
        Ok(())
    }
}

/// Terminal on a plain UART
pub struct SerialTerminal<U> {
    uart: U,
}

impl<U: UartTx> SerialTerminal<U> {
    pub fn new(uart: U) -> Self {
        Self { uart }
    }

    /// Release the underlying UART
    pub fn into_inner(self) -> U {
        self.uart
    }
}

impl<U: UartTx> Terminal for SerialTerminal<U> {
    fn write(&mut self, bytes: &[u8]) -> Result<(), TermError> {
        self.uart
            .write_blocking(bytes)
            .map_err(|_| TermError::Transport)
    }

    fn flush(&mut self) -> Result<(), TermError> {
        self.uart.flush().map_err(|_| TermError::Transport)
    }
}
