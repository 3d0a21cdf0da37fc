//! Error type shared by the renderer and controller

/// Errors reported at the renderer/controller boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TermError {
    /// Cell index outside 0..=8
    InvalidCell(u8),
    /// Message index outside the three defined messages
    InvalidMessage(u8),
    /// `run_active_state` called before `initialize`
    NotInitialized,
    /// Terminal transport rejected the bytes
    Transport,
}
