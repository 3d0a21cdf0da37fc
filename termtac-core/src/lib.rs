//! Board-agnostic core logic for the tic-tac-toe terminal display
//!
//! This crate draws the game on a 17 x 14 serial terminal and turns local
//! button presses into board updates. It is not a game engine: there is no
//! board model, turn validation or win detection here, only what is drawn.
//!
//! - Board geometry and the fixed screen layout
//! - Terminal renderer (glyphs and status messages)
//! - State machine and the controller that steps it once per tick
//! - Button binding configuration
//! - Traits for the terminal transport and button inputs

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod board;
pub mod config;
pub mod controller;
pub mod error;
pub mod message;
pub mod render;
pub mod state;
pub mod traits;

#[cfg(test)]
mod testing;

pub use board::{Cell, Glyph, Position};
pub use controller::{Controller, MAX_TRANSPORT_FAILURES};
pub use error::TermError;
pub use message::UserMessage;
pub use render::Renderer;
pub use state::{ErrorKind, Event, State};
