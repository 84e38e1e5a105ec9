//! Infrared receiver implementations
//!
//! - [`PulseDistanceReceiver`]: blocking, sample-counting receiver

pub mod pulse;

pub use pulse::PulseDistanceReceiver;
