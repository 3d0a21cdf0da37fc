//! Configuration type definitions

use crate::board::{Glyph, CELL_COUNT};
use crate::message::UserMessage;
use crate::traits::{Button, BUTTON_COUNT};

/// What a button press draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonBinding {
    /// Button that triggers the draw
    pub button: Button,
    /// Cell index (0-8)
    pub cell: u8,
    /// Glyph drawn at the cell
    pub glyph: Glyph,
    /// Status message shown afterwards
    pub message: UserMessage,
}

/// Controller configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TermConfig {
    /// One binding per button, polled in this order
    pub bindings: [ButtonBinding; BUTTON_COUNT],
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Two bindings use the same button
    DuplicateButton(Button),
    /// Binding points outside the board
    InvalidCell(u8),
}

impl Default for TermConfig {
    /// Demo mapping: the first two buttons draw remote X moves, the last two
    /// local O moves
    fn default() -> Self {
        Self {
            bindings: [
                ButtonBinding {
                    button: Button::B0,
                    cell: 0,
                    glyph: Glyph::X,
                    message: UserMessage::RemoteMove,
                },
                ButtonBinding {
                    button: Button::B1,
                    cell: 2,
                    glyph: Glyph::X,
                    message: UserMessage::RemoteMove,
                },
                ButtonBinding {
                    button: Button::B2,
                    cell: 4,
                    glyph: Glyph::O,
                    message: UserMessage::LocalMove,
                },
                ButtonBinding {
                    button: Button::B3,
                    cell: 8,
                    glyph: Glyph::O,
                    message: UserMessage::LocalMove,
                },
            ],
        }
    }
}

impl TermConfig {
    /// Check that every cell is on the board and no button is bound twice
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, binding) in self.bindings.iter().enumerate() {
            if binding.cell >= CELL_COUNT {
                return Err(ConfigError::InvalidCell(binding.cell));
            }
            if self.bindings[..i].iter().any(|b| b.button == binding.button) {
                return Err(ConfigError::DuplicateButton(binding.button));
            }
        }
        Ok(())
    }

    /// Find the binding for a button
    pub fn binding(&self, button: Button) -> Option<&ButtonBinding> {
        self.bindings.iter().find(|b| b.button == button)
    }
}
