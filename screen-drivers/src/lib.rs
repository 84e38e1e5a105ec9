//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in screen-core on top of screen-hal pins:
//!
//! - Motor drivers (two-input H-bridge)
//! - Sensors (home endswitch)
//! - Infrared receivers (busy-wait pulse-distance decoder)
//! - Rotation sensor edge detection (comparator with bias output)

#![no_std]
#![deny(unsafe_code)]

pub mod infrared;
pub mod motor;
pub mod rotation;
pub mod sensor;
