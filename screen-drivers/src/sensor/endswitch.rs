//! Home position endswitch

use screen_core::traits::LimitSwitch;
use screen_hal::{InputPin, Inverted};

/// Endswitch on a digital input
///
/// `P` must read high while the screen is at home. The usual wiring
/// pulls the line to ground at home; use [`EndSwitch::active_low`] for
/// that.
pub struct EndSwitch<P> {
    pin: P,
}

impl<P: InputPin> EndSwitch<P> {
    /// Endswitch on an active-high signal
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P: InputPin> EndSwitch<Inverted<P>> {
    /// Endswitch on an active-low signal
    pub fn active_low(pin: P) -> Self {
        Self::new(Inverted(pin))
    }
}

impl<P: InputPin> LimitSwitch for EndSwitch<P> {
    fn is_triggered(&self) -> bool {
        self.pin.is_high()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct MockPin<'a>(&'a Cell<bool>);

    impl InputPin for MockPin<'_> {
        fn is_high(&self) -> bool {
            self.0.get()
        }
    }

    #[test]
    fn test_active_low() {
        let line = Cell::new(true);
        let switch = EndSwitch::active_low(MockPin(&line));
        assert!(!switch.is_triggered());

        line.set(false);
        assert!(switch.is_triggered());
    }

    #[test]
    fn test_active_high() {
        let line = Cell::new(true);
        let switch = EndSwitch::new(MockPin(&line));
        assert!(switch.is_triggered());
    }
}
