//! State machine for the display
//!
//! Exactly one state is active. Transitions are explicit, finite and
//! deterministic.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::{ErrorKind, State};
