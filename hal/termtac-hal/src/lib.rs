//! termtac Hardware Abstraction Layer
//!
//! Serial traits that chip-specific code implements so the terminal
//! renderer in `termtac-core` can drive any UART.
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  termtac-firmware (RP2040 / Embassy)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  termtac-core (renderer, state machine) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  termtac-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`uart::UartTx`] - Serial transmit

#![no_std]
#![deny(unsafe_code)]

pub mod uart;

pub use uart::{UartConfig, UartTx};
