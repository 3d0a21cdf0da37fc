//! Events that trigger state transitions

use super::machine::ErrorKind;

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Screen configured, board and waiting message drawn
    SetupComplete,
    /// A collaborator reported a fault
    ErrorDetected(ErrorKind),
}
