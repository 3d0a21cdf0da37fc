//! Latched button presses
//!
//! Each button task sets its latch on a debounced press; the display
//! controller reads and clears the latches through [`ButtonInput`].

use portable_atomic::{AtomicBool, Ordering};
use termtac_core::traits::{Button, ButtonInput, BUTTON_COUNT};

/// One latch per button, set by the button tasks
static PRESSED: [AtomicBool; BUTTON_COUNT] = [
    AtomicBool::new(false),
    AtomicBool::new(false),
    AtomicBool::new(false),
    AtomicBool::new(false),
];

/// Record a press for the controller to pick up
pub fn latch(button: Button) {
    PRESSED[button.index()].store(true, Ordering::Release);
}

/// Controller-side view of the latches
pub struct LatchedButtons;

impl ButtonInput for LatchedButtons {
    fn was_pressed(&self, button: Button) -> bool {
        PRESSED[button.index()].load(Ordering::Acquire)
    }

    fn acknowledge(&mut self, button: Button) {
        PRESSED[button.index()].store(false, Ordering::Release);
    }
}
