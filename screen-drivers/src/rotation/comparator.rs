//! Rotation sensor edge detector
//!
//! The rotation sensor is a reflective sensor read through an analog
//! comparator. Near the threshold the comparator output would chatter,
//! so a bias output shifts the threshold after every edge: high after a
//! falling edge, low after a rising one. That gives the comparator a
//! software-controlled hysteresis (a Schmitt trigger).
//!
//! [`ComparatorEdge::on_level`] runs in interrupt context on every
//! comparator change. It only touches the shared [`RotationTracker`].

use screen_core::controller::RotationTracker;
use screen_hal::{Cycles, OutputPin};

/// Comparator edge detector with hysteresis bias output
pub struct ComparatorEdge<'r, B> {
    bias: B,
    tracker: &'r RotationTracker,
    last_low: bool,
}

impl<'r, B: OutputPin> ComparatorEdge<'r, B> {
    /// Create an edge detector with the comparator assumed high
    pub fn new(mut bias: B, tracker: &'r RotationTracker) -> Self {
        bias.set_low();
        Self {
            bias,
            tracker,
            last_low: false,
        }
    }

    /// Handle a comparator level sample
    ///
    /// Counts one rotation tick if the level differs from the last one
    /// seen, then updates the bias. Returns `true` if a tick was counted.
    pub fn on_level(&mut self, comparator_low: bool, now: Cycles) -> bool {
        let edge = comparator_low != self.last_low;
        if edge {
            self.last_low = comparator_low;
            self.tracker.rotation_tick(now);
        }
        self.bias.set_state(comparator_low);
        edge
    }

    /// Current bias output level
    pub fn bias_high(&self) -> bool {
        self.bias.is_set_high()
    }
}
