//! Configuration types
//!
//! Board-agnostic button bindings for the demo controller.

pub mod types;

pub use types::*;
