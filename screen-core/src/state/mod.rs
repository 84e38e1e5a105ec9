//! Screen motion and fault state
//!
//! The controller's discrete state is a `(Direction, Option<Fault>)` pair;
//! position is auxiliary continuous state kept in the rotation tracker.

pub mod events;
pub mod machine;

pub use events::StopReason;
pub use machine::{Direction, Fault};
