//! Outcomes reported by the periodic stop-condition check

use super::machine::{Direction, Fault};

/// Why the motor was stopped by `check_stop_conditions`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopReason {
    /// A fault was detected and latched
    Fault(Fault),
    /// Normal stop: the travel limit for this direction was reached
    LimitReached(Direction),
}
