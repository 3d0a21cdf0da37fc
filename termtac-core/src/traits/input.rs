//! Button input trait
//!
//! Debouncing and edge detection happen in the board code; the controller
//! only sees latched presses and clears them.

/// Number of local buttons
pub const BUTTON_COUNT: usize = 4;

/// Local push button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    B0,
    B1,
    B2,
    B3,
}

impl Button {
    pub const ALL: [Button; BUTTON_COUNT] = [Button::B0, Button::B1, Button::B2, Button::B3];

    /// Index 0..4
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Source of latched button presses
pub trait ButtonInput {
    /// Check if a press has been latched since the last acknowledge
    fn was_pressed(&self, button: Button) -> bool;

    /// Clear the latched press
    fn acknowledge(&mut self, button: Button);
}
