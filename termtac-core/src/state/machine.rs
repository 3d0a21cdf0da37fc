//! State machine definition

use super::events::Event;

/// Display states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Draw the screen; runs for exactly one successful tick
    Setup,
    /// Poll buttons and draw moves
    Idle,
    /// Fault trap; nothing is drawn
    Error(ErrorKind),
}

/// Conditions that send the machine to [`State::Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKind {
    /// Radio link reported a malformed or unexpected message
    LinkFault,
    /// Terminal transport kept failing
    TerminalFault,
}

impl State {
    /// Check if this is the error trap
    pub fn is_error(&self) -> bool {
        matches!(self, State::Error(_))
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            // Error is a trap; the first fault is kept
            (Error(_), _) => self,

            (Setup, SetupComplete) => Idle,
            (_, ErrorDetected(kind)) => Error(kind),

            // Default: stay in current state
            _ => self,
        }
    }
}
