//! Hardware tick counter abstraction
//!
//! The firmware keeps time with a free-running 16-bit counter. It wraps,
//! so every interval comparison is done with wrapping subtraction and is
//! only meaningful for intervals shorter than one rollover period.

/// Raw counter value
pub type Cycles = u16;

/// Free-running, wrapping hardware counter
///
/// Implementors must count up at a constant rate of
/// [`TICKS_PER_SECOND`](Self::TICKS_PER_SECOND) and wrap from
/// `Cycles::MAX` to zero.
pub trait TickCounter {
    /// Counter rate in ticks per second (integer part)
    const TICKS_PER_SECOND: u32;

    /// Current counter value
    fn ticks(&self) -> Cycles;
}

impl<T: TickCounter> TickCounter for &T {
    const TICKS_PER_SECOND: u32 = T::TICKS_PER_SECOND;

    fn ticks(&self) -> Cycles {
        (**self).ticks()
    }
}
