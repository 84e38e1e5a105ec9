//! GPIO wrappers
//!
//! Thin adapters that let `embassy-rp` pins be used wherever the control
//! logic expects a `screen-hal` pin. Pull-ups and initial levels are set
//! by the caller when the embassy pin is created.

use embassy_rp::gpio::{Input, Output};
use screen_hal::{InputPin, OutputPin};

/// Push-pull output
pub struct RpOutput<'d> {
    pin: Output<'d>,
}

impl<'d> RpOutput<'d> {
    /// Wrap a configured embassy output
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl OutputPin for RpOutput<'_> {
    #[inline]
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    #[inline]
    fn set_low(&mut self) {
        self.pin.set_low();
    }

    #[inline]
    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

/// Digital input
pub struct RpInput<'d> {
    pin: Input<'d>,
}

impl<'d> RpInput<'d> {
    /// Wrap a configured embassy input
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }
}

impl InputPin for RpInput<'_> {
    #[inline]
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}
