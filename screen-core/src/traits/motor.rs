//! Motor driver trait
//!
//! The screen motor sits behind an H-bridge with one input per direction.
//! There is no speed control; the bridge is either driving one way, the
//! other way, or off.

use crate::state::Direction;

/// H-bridge motor driver
pub trait MotorBridge {
    /// Drive the motor in the given direction
    ///
    /// Implementations must assert exactly the output pair that belongs
    /// to `dir` and never both at once. `Direction::Neutral` de-asserts
    /// both outputs.
    fn drive(&mut self, dir: Direction);

    /// Direction the bridge is currently driving
    fn driving(&self) -> Direction;
}
