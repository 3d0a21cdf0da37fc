//! Test doubles for the terminal and buttons

use heapless::Vec;

use crate::error::TermError;
use crate::traits::{Button, ButtonInput, Terminal, BUTTON_COUNT};

/// Terminal that records every byte written
#[derive(Default)]
pub struct CaptureTerminal {
    pub bytes: Vec<u8, 2048>,
    pub passthrough: bool,
    pub flushes: u32,
    pub broken: bool,
}

impl CaptureTerminal {
    pub fn contains(&self, needle: &[u8]) -> bool {
        self.bytes.windows(needle.len()).any(|w| w == needle)
    }

    pub fn take(&mut self) -> Vec<u8, 2048> {
        core::mem::take(&mut self.bytes)
    }
}

impl Terminal for CaptureTerminal {
    fn write(&mut self, bytes: &[u8]) -> Result<(), TermError> {
        if self.broken {
            return Err(TermError::Transport);
        }
        self.bytes
            .extend_from_slice(bytes)
            .map_err(|_| TermError::Transport)
    }

    fn set_passthrough(&mut self) -> Result<(), TermError> {
        self.passthrough = true;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), TermError> {
        if self.broken {
            return Err(TermError::Transport);
        }
        self.flushes += 1;
        Ok(())
    }
}

/// Buttons whose presses are set directly by the test
#[derive(Default)]
pub struct FakeButtons {
    pub pressed: [bool; BUTTON_COUNT],
    pub acknowledged: [u32; BUTTON_COUNT],
}

impl FakeButtons {
    pub fn press(&mut self, button: Button) {
        self.pressed[button.index()] = true;
    }
}

impl ButtonInput for FakeButtons {
    fn was_pressed(&self, button: Button) -> bool {
        self.pressed[button.index()]
    }

    fn acknowledge(&mut self, button: Button) {
        self.pressed[button.index()] = false;
        self.acknowledged[button.index()] += 1;
    }
}
