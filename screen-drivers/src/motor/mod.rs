//! Motor driver implementations
//!
//! The screen motor is a plain DC gear motor behind an H-bridge:
//!
//! - [`HBridge`]: one input per direction, no speed control

pub mod hbridge;

pub use hbridge::HBridge;
