//! Retriggerable timed gate
//!
//! A monoflop reports "active" for a fixed window after it was last
//! triggered. There is no timer behind it; [`Monoflop::regular_check`]
//! has to be polled from the main loop at least once per counter
//! rollover period so an expired window is cleared before the wrapping
//! timestamp could make it look fresh again.

use screen_hal::{Cycles, TickCounter};

use crate::clock::Clock;

/// One-shot timed gate
#[derive(Debug, Clone)]
pub struct Monoflop<C> {
    clock: Clock<C>,
    duration: Cycles,
    trigger_time: Cycles,
    active: bool,
}

impl<C: TickCounter> Monoflop<C> {
    /// Create an inactive monoflop with a window of `duration` ticks
    pub fn new(clock: Clock<C>, duration: Cycles) -> Self {
        Self {
            clock,
            duration,
            trigger_time: 0,
            active: false,
        }
    }

    /// Start (or restart) the window from now
    pub fn trigger(&mut self) {
        self.trigger_time = self.clock.now();
        self.active = true;
    }

    /// Check whether the window is still open
    pub fn is_active(&self) -> bool {
        self.active && !self.clock.has_elapsed(self.trigger_time, self.duration)
    }

    /// Clear the window once it has expired
    pub fn regular_check(&mut self) {
        if self.active && self.clock.has_elapsed(self.trigger_time, self.duration) {
            self.active = false;
        }
    }

    /// Window length in ticks
    pub fn duration(&self) -> Cycles {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::mock::MockTicks;
    use core::cell::Cell;
    use proptest::prelude::*;

    #[test]
    fn test_inactive_until_triggered() {
        let ticks = Cell::new(0);
        let flop = Monoflop::new(Clock::new(MockTicks(&ticks)), 100);
        assert!(!flop.is_active());
    }

    #[test]
    fn test_window_edges() {
        let ticks = Cell::new(0);
        let mock = MockTicks(&ticks);
        let mut flop = Monoflop::new(Clock::new(mock), 100);

        flop.trigger();
        assert!(flop.is_active());

        mock.advance(99);
        assert!(flop.is_active());

        mock.advance(1);
        assert!(!flop.is_active());
    }

    #[test]
    fn test_retrigger_restarts_window() {
        let ticks = Cell::new(0);
        let mock = MockTicks(&ticks);
        let mut flop = Monoflop::new(Clock::new(mock), 100);

        flop.trigger();
        mock.advance(80);
        flop.trigger();
        mock.advance(80);
        assert!(flop.is_active());

        mock.advance(20);
        assert!(!flop.is_active());
    }

    #[test]
    fn test_regular_check_prevents_wraparound_reactivation() {
        let ticks = Cell::new(0);
        let mock = MockTicks(&ticks);
        let mut flop = Monoflop::new(Clock::new(mock), 100);

        flop.trigger();
        mock.advance(500);
        flop.regular_check();

        // A full rollover later the raw difference is small again
        ticks.set(10);
        assert!(!flop.is_active());
    }

    proptest! {
        #[test]
        fn prop_active_exactly_within_window(
            start in any::<u16>(),
            duration in 1u16..30_000,
            elapsed in 0u16..32_000,
            checks in proptest::collection::vec(0u16..32_000, 0..8),
        ) {
            let ticks = Cell::new(start);
            let mock = MockTicks(&ticks);
            let mut flop = Monoflop::new(Clock::new(mock), duration);
            flop.trigger();

            // Intermediate polls at arbitrary points up to `elapsed`
            let mut points: heapless::Vec<u16, 8> = checks
                .into_iter()
                .filter(|&c| c <= elapsed)
                .collect();
            points.sort_unstable();
            for point in points {
                ticks.set(start.wrapping_add(point));
                flop.regular_check();
            }

            ticks.set(start.wrapping_add(elapsed));
            prop_assert_eq!(flop.is_active(), elapsed < duration);
        }
    }
}
