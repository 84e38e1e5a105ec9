//! Wrapping time source
//!
//! Thin layer over a [`TickCounter`] that converts milliseconds to
//! counter ticks and performs wraparound-safe elapsed-time checks.
//!
//! # Rollover limitation
//!
//! The counter is 16 bits wide. At the firmware's 7812 Hz tick rate it
//! rolls over every 65536 / 7812 ≈ 8.39 s. Elapsed-time checks use
//! wrapping subtraction (`now - earlier`), so an interval is only measured
//! correctly while it is shorter than one rollover period. Anything that
//! compares against a timestamp must look at it at least once per
//! rollover period, otherwise an old timestamp can appear fresh again.

use screen_hal::{Cycles, TickCounter};

/// Time source wrapping a hardware tick counter
#[derive(Debug, Clone, Copy)]
pub struct Clock<C> {
    counter: C,
}

impl<C: TickCounter> Clock<C> {
    /// Wrap a hardware counter
    pub const fn new(counter: C) -> Self {
        Self { counter }
    }

    /// Current wrapping tick value
    #[inline]
    pub fn now(&self) -> Cycles {
        self.counter.ticks()
    }

    /// Convert a duration in milliseconds to counter ticks
    ///
    /// Saturates at `Cycles::MAX`. Durations at or above the rollover
    /// period cannot be measured anyway; [`ScreenConfig::validate`]
    /// rejects them before they get here.
    ///
    /// [`ScreenConfig::validate`]: crate::config::ScreenConfig::validate
    pub const fn ms_to_cycles(ms: u16) -> Cycles {
        let cycles = ms as u32 * C::TICKS_PER_SECOND / 1000;
        if cycles > Cycles::MAX as u32 {
            Cycles::MAX
        } else {
            cycles as Cycles
        }
    }

    /// Rollover period of the counter in milliseconds
    pub const fn rollover_ms() -> u32 {
        rollover_ms(C::TICKS_PER_SECOND)
    }

    /// Ticks elapsed since `earlier` (wraparound-safe)
    #[inline]
    pub fn elapsed_since(&self, earlier: Cycles) -> Cycles {
        self.now().wrapping_sub(earlier)
    }

    /// Check whether at least `interval` ticks have passed since `earlier`
    #[inline]
    pub fn has_elapsed(&self, earlier: Cycles, interval: Cycles) -> bool {
        self.elapsed_since(earlier) >= interval
    }
}

/// Rollover period in milliseconds for a counter running at `ticks_per_second`
pub const fn rollover_ms(ticks_per_second: u32) -> u32 {
    if ticks_per_second == 0 {
        return u32::MAX;
    }
    (Cycles::MAX as u32 + 1) * 1000 / ticks_per_second
}


#[cfg(test)]
mod tests {
    use super::mock::MockTicks;
    use super::*;
    use core::cell::Cell;

    type TestClock<'a> = Clock<MockTicks<'a>>;

    #[test]
    fn test_ms_to_cycles() {
        assert_eq!(TestClock::ms_to_cycles(0), 0);
        assert_eq!(TestClock::ms_to_cycles(1000), 7812);
        assert_eq!(TestClock::ms_to_cycles(4000), 31248);
    }

    #[test]
    fn test_ms_to_cycles_saturates() {
        assert_eq!(TestClock::ms_to_cycles(60_000), Cycles::MAX);
    }

    #[test]
    fn test_rollover_period() {
        // 65536 ticks at 7812 Hz
        assert_eq!(TestClock::rollover_ms(), 8389);
        assert_eq!(rollover_ms(0), u32::MAX);
    }

    #[test]
    fn test_elapsed_across_wrap() {
        let ticks = Cell::new(65_000);
        let clock = Clock::new(MockTicks(&ticks));
        let start = clock.now();

        ticks.set(200);
        assert_eq!(clock.elapsed_since(start), 736);
        assert!(clock.has_elapsed(start, 736));
        assert!(!clock.has_elapsed(start, 737));
    }
}
