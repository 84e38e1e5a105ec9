//! Board-agnostic core logic for the projection screen firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (motor bridge, endswitch, IR receiver)
//! - Wrapping clock and the extra-buttons monoflop
//! - Screen state machine with fault detection
//! - Infrared command table and button dispatch
//! - Status LED patterns
//! - Configuration types and the `screen.toml` parser
//! - The cooperative main loop
//!
//! # Contexts
//!
//! The only state shared with interrupt context is
//! [`controller::RotationTracker`]. Everything else is owned by the main
//! loop.

#![no_std]
#![deny(unsafe_code)]

pub mod app;
pub mod clock;
pub mod config;
pub mod controller;
pub mod dispatch;
pub mod infrared;
pub mod monoflop;
pub mod state;
pub mod status;
pub mod traits;

pub use app::{LoopReport, ScreenApp};
pub use clock::Clock;
pub use controller::{RotationTracker, ScreenController};
pub use monoflop::Monoflop;
