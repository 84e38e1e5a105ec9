//! Busy-wait pulse-distance infrared receiver
//!
//! Samples the demodulated receiver output at a fixed period and measures
//! each high phase by counting samples. This blocks the caller for the
//! whole transmission. With the default timing a full frame takes around
//! 60 ms; the main loop is suspended meanwhile, encoder interrupts are
//! not.

use embedded_hal::delay::DelayNs;
use screen_core::infrared::{InfraredFrame, InfraredTiming};
use screen_core::traits::InfraredReceiver;
use screen_hal::InputPin;

/// Pulse-distance receiver on a single idle-high input
pub struct PulseDistanceReceiver<P, D> {
    pin: P,
    delay: D,
    timing: InfraredTiming,
}

impl<P: InputPin, D: DelayNs> PulseDistanceReceiver<P, D> {
    /// Create a receiver
    pub fn new(pin: P, delay: D, timing: InfraredTiming) -> Self {
        Self { pin, delay, timing }
    }

    /// Count samples while the line stays at `high`, up to end of signal
    fn count_while(&mut self, high: bool) -> u32 {
        let mut count = 0;
        while self.pin.is_high() == high && count < self.timing.end_of_signal {
            self.delay.delay_us(self.timing.sample_period_us);
            count += 1;
        }
        count
    }
}

impl<P: InputPin, D: DelayNs> InfraredReceiver for PulseDistanceReceiver<P, D> {
    fn signal_started(&self) -> bool {
        self.pin.is_low()
    }

    fn read_frame(&mut self) -> InfraredFrame {
        let mut frame = InfraredFrame::new();
        let mut byte = 0u8;
        let mut mask = 0x80u8;

        loop {
            // A line stuck low is no transmission either
            if self.count_while(false) >= self.timing.end_of_signal {
                break;
            }
            let high = self.count_while(true);
            if high >= self.timing.end_of_signal {
                break;
            }
            if high > self.timing.bit_threshold {
                byte |= mask;
            }

            mask >>= 1;
            if mask == 0 {
                frame.push(byte);
                if frame.is_complete() {
                    break;
                }
                byte = 0;
                mask = 0x80;
            }
        }
        frame
    }
}
