//! Projection screen Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the control logic
//! is written against. Chip-specific HALs implement them, which keeps the
//! whole state machine testable on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (screen-firmware)          │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  screen-core  │       │screen-drivers │
//! └───────────────┘       └───────────────┘
//!         │                       │
//!         └───────────┬───────────┘
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  screen-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │  screen-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`clock::TickCounter`] - Wrapping hardware tick counter

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use clock::{Cycles, TickCounter};
pub use gpio::{InputPin, Inverted, OutputPin};
