//! Status LED patterns
//!
//! The LED is the only operator feedback. Blink phases are taken straight
//! from bits of the tick counter, so no extra timer state is needed.

use screen_hal::Cycles;

use crate::state::Fault;

/// Counter bit driving the slow blink (about 0.5 s per phase at 7812 Hz)
pub const SLOW_BLINK_MASK: Cycles = 1 << 12;

/// Counter bit driving the fast blink (about 0.13 s per phase at 7812 Hz)
pub const FAST_BLINK_MASK: Cycles = 1 << 10;

/// What the status LED shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusPattern {
    /// No fault: steady, lit while the extra-buttons window is open
    Indicate(bool),
    /// Switch fault
    SlowBlink,
    /// Rotation fault
    FastBlink,
}

impl StatusPattern {
    /// Pattern for the given fault state
    pub fn for_state(error: Option<Fault>, extra_buttons_active: bool) -> Self {
        match error {
            None => StatusPattern::Indicate(extra_buttons_active),
            Some(Fault::Switch) => StatusPattern::SlowBlink,
            Some(Fault::Rotation) => StatusPattern::FastBlink,
        }
    }

    /// LED level at counter value `now`
    pub fn level(self, now: Cycles) -> bool {
        match self {
            StatusPattern::Indicate(on) => on,
            StatusPattern::SlowBlink => now & SLOW_BLINK_MASK != 0,
            StatusPattern::FastBlink => now & FAST_BLINK_MASK != 0,
        }
    }
}
