//! Terminal display protocol
//!
//! The display is any VT100-compatible terminal program attached to the
//! debug UART. Everything drawn on it is a byte stream of printable text
//! interleaved with ANSI escape sequences:
//!
//! ```text
//! ┌───────┬─────┬───┬────────────┬───────┐
//! │       │ ESC │ [ │ PARAMETERS │ FINAL │
//! │ bytes │ 1   │ 1 │ 0-7        │ 1     │
//! └───────┴─────┴───┴────────────┴───────┘
//! ```
//!
//! Only the small subset needed by the board renderer is provided: SGR
//! formatting, erase display, cursor home/hide and cursor positioning.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod ansi;

pub use ansi::{cursor_position, CursorSequence, ESC, MAX_CUP_LEN};
