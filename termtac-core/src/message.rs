//! Status messages shown on the reserved status row

use crate::board::WINDOW_COLS;
use crate::error::TermError;

/// Every message spans exactly one window row so a shorter message never
/// leaves characters of a longer one behind.
pub const MESSAGE_WIDTH: usize = WINDOW_COLS as usize;

//                              12345678901234567
const MESSAGES: [&str; 3] = [" WAIT TO CONNECT ", "    YOUR TURN    ", "    THEIR TURN   "];

/// Message drawn on the status row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UserMessage {
    /// Waiting for the game peer to connect
    Waiting,
    /// Local player's move; drawn blinking
    LocalMove,
    /// Remote player's move
    RemoteMove,
}

impl UserMessage {
    pub const ALL: [UserMessage; 3] = [
        UserMessage::Waiting,
        UserMessage::LocalMove,
        UserMessage::RemoteMove,
    ];

    /// Fixed-width text for this message
    pub const fn text(self) -> &'static str {
        MESSAGES[self as usize]
    }

    /// Whether the message is drawn with the blink attribute
    pub const fn blinks(self) -> bool {
        matches!(self, UserMessage::LocalMove)
    }
}

impl TryFrom<u8> for UserMessage {
    type Error = TermError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(UserMessage::Waiting),
            1 => Ok(UserMessage::LocalMove),
            2 => Ok(UserMessage::RemoteMove),
            _ => Err(TermError::InvalidMessage(index)),
        }
    }
}
