//! RP2040-specific HAL for the projection screen firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `screen-hal` traits:
//!
//! - GPIO wrappers around `embassy-rp` inputs and outputs
//! - A wrapping tick counter derived from the `embassy-time` driver

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod gpio;

pub use clock::EmbassyTicks;
pub use gpio::{RpInput, RpOutput};
