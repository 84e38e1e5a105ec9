//! Tick counter on top of the embassy time driver
//!
//! The control logic expects a free-running 16-bit counter. The AVR
//! board clocked one from 8 MHz through a /1024 prescaler; here the same
//! rate is derived from the 1 MHz embassy timebase by dropping the low
//! 7 bits (1 MHz / 128 = 7812.5 Hz). The counter wraps every ~8.4 s.

use embassy_time::Instant;
use screen_hal::{Cycles, TickCounter};

/// Microseconds per tick, as a shift
const TICK_SHIFT: u32 = 7;

/// Wrapping 7812 Hz counter
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EmbassyTicks;

impl TickCounter for EmbassyTicks {
    // Integer part of 7812.5; the error is 64 ppm
    const TICKS_PER_SECOND: u32 = 1_000_000 >> TICK_SHIFT;

    #[inline]
    fn ticks(&self) -> Cycles {
        (Instant::now().as_micros() >> TICK_SHIFT) as Cycles
    }
}
