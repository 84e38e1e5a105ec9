//! Embassy async tasks
//!
//! Only interrupt-context work runs as a task; the control loop itself
//! is the blocking thread-mode main loop.

pub mod rotation;

pub use rotation::rotation_task;
