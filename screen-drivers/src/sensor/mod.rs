//! Sensor implementations
//!
//! - [`EndSwitch`]: home position switch

pub mod endswitch;

pub use endswitch::EndSwitch;
