//! Embassy async tasks
//!
//! Button tasks latch presses; the display task steps the controller once
//! per tick.

pub mod button;
pub mod display;

pub use button::button_task;
pub use display::display_task;
