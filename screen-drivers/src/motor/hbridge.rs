//! Two-input H-bridge driver
//!
//! One GPIO per direction. Asserting `up` rolls the screen up, asserting
//! `down` rolls it down, neither stops the motor. Both at once would
//! short the bridge on most driver boards, so the opposite input is
//! always released before the requested one is asserted.

use screen_core::state::Direction;
use screen_core::traits::MotorBridge;
use screen_hal::OutputPin;

/// H-bridge with one input per direction
pub struct HBridge<U, D> {
    up: U,
    down: D,
}

impl<U: OutputPin, D: OutputPin> HBridge<U, D> {
    /// Create a new H-bridge driver with the motor stopped
    pub fn new(up: U, down: D) -> Self {
        let mut bridge = Self { up, down };
        bridge.drive(Direction::Neutral);
        bridge
    }
}

impl<U: OutputPin, D: OutputPin> MotorBridge for HBridge<U, D> {
    fn drive(&mut self, dir: Direction) {
        match dir {
            Direction::Neutral => {
                self.up.set_low();
                self.down.set_low();
            }
            Direction::Up => {
                self.down.set_low();
                self.up.set_high();
            }
            Direction::Down => {
                self.up.set_low();
                self.down.set_high();
            }
        }
    }

    fn driving(&self) -> Direction {
        match (self.up.is_set_high(), self.down.is_set_high()) {
            (true, false) => Direction::Up,
            (false, true) => Direction::Down,
            _ => Direction::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use proptest::prelude::*;

    /// Pin that records its level and flags any moment both bridge
    /// inputs are high
    struct MockPin<'a> {
        level: &'a Cell<bool>,
        other: &'a Cell<bool>,
        shorted: &'a Cell<bool>,
    }

    impl OutputPin for MockPin<'_> {
        fn set_high(&mut self) {
            self.level.set(true);
            if self.other.get() {
                self.shorted.set(true);
            }
        }

        fn set_low(&mut self) {
            self.level.set(false);
        }

        fn is_set_high(&self) -> bool {
            self.level.get()
        }
    }

    struct Lines {
        up: Cell<bool>,
        down: Cell<bool>,
        shorted: Cell<bool>,
    }

    impl Lines {
        fn new() -> Self {
            Self {
                // Start from garbage to check the constructor
                up: Cell::new(true),
                down: Cell::new(false),
                shorted: Cell::new(false),
            }
        }

        fn bridge(&self) -> HBridge<MockPin<'_>, MockPin<'_>> {
            HBridge::new(
                MockPin {
                    level: &self.up,
                    other: &self.down,
                    shorted: &self.shorted,
                },
                MockPin {
                    level: &self.down,
                    other: &self.up,
                    shorted: &self.shorted,
                },
            )
        }
    }

    fn direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Neutral),
            Just(Direction::Up),
            Just(Direction::Down),
        ]
    }

    #[test]
    fn test_starts_stopped() {
        let lines = Lines::new();
        let bridge = lines.bridge();
        assert_eq!(bridge.driving(), Direction::Neutral);
        assert!(!lines.up.get() && !lines.down.get());
    }

    #[test]
    fn test_direct_reversal() {
        let lines = Lines::new();
        let mut bridge = lines.bridge();

        bridge.drive(Direction::Up);
        assert!(lines.up.get() && !lines.down.get());

        bridge.drive(Direction::Down);
        assert!(!lines.up.get() && lines.down.get());
        assert!(!lines.shorted.get());
    }

    proptest! {
        #[test]
        fn prop_outputs_match_direction(dirs in proptest::collection::vec(direction(), 1..32)) {
            let lines = Lines::new();
            let mut bridge = lines.bridge();

            for dir in dirs {
                bridge.drive(dir);
                prop_assert_eq!(bridge.driving(), dir);
                prop_assert_eq!(lines.up.get(), dir == Direction::Up);
                prop_assert_eq!(lines.down.get(), dir == Direction::Down);
            }
            prop_assert!(!lines.shorted.get());
        }
    }
}
