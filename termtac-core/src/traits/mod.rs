//! Hardware abstraction traits
//!
//! These traits define the interface between the display logic and the
//! board-specific transport and input code.

pub mod input;
pub mod terminal;

pub use input::{Button, ButtonInput, BUTTON_COUNT};
pub use terminal::{SerialTerminal, Terminal};
