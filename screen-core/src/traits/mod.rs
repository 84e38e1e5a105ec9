//! Hardware abstraction traits
//!
//! These traits define the interface between the control logic and the
//! drivers that sit on top of concrete pins.

pub mod infrared;
pub mod motor;
pub mod sensor;

pub use infrared::InfraredReceiver;
pub use motor::MotorBridge;
pub use sensor::LimitSwitch;
