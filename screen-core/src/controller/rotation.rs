//! Interrupt-shared motion state
//!
//! The rotation sensor interrupt and the main loop share exactly three
//! values: position, the time of the last encoder tick, and the commanded
//! direction (read-only from the interrupt side). They live here as
//! atomics so neither context can observe a torn value, and the interrupt
//! handler never needs a reference to the controller itself.
//!
//! ```ignore
//! static ROTATION: RotationTracker = RotationTracker::new();
//!
//! // interrupt context
//! ROTATION.rotation_tick(clock.now());
//!
//! // main context
//! let controller = ScreenController::new(clock, motor, endswitch, &ROTATION, &config);
//! ```

use portable_atomic::{AtomicI16, AtomicU16, AtomicU8, Ordering};
use screen_hal::Cycles;

use crate::state::Direction;

/// Position, last-tick time and direction shared with the interrupt handler
///
/// Single-core target: every access is one atomic load, store or
/// read-modify-write, so `Relaxed` ordering is sufficient.
#[derive(Debug)]
pub struct RotationTracker {
    position: AtomicI16,
    last_update: AtomicU16,
    direction: AtomicU8,
}

impl Default for RotationTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl RotationTracker {
    /// Create a tracker at position 0, not moving
    pub const fn new() -> Self {
        Self {
            position: AtomicI16::new(0),
            last_update: AtomicU16::new(0),
            direction: AtomicU8::new(Direction::Neutral.as_raw()),
        }
    }

    /// Record one encoder tick
    ///
    /// Called from interrupt context. Moves the position one step in the
    /// commanded direction and refreshes the last-tick timestamp. Ticks
    /// while not moving only refresh the timestamp.
    pub fn rotation_tick(&self, now: Cycles) {
        self.last_update.store(now, Ordering::Relaxed);
        let step = self.direction().step();
        if step != 0 {
            self.position.fetch_add(step, Ordering::Relaxed);
        }
    }

    /// Current position in encoder ticks (0 = home)
    pub fn position(&self) -> i16 {
        self.position.load(Ordering::Relaxed)
    }

    /// Time of the last encoder tick or motor start
    pub fn last_update(&self) -> Cycles {
        self.last_update.load(Ordering::Relaxed)
    }

    /// Commanded direction
    pub fn direction(&self) -> Direction {
        Direction::from_raw(self.direction.load(Ordering::Relaxed))
    }

    pub(crate) fn set_position(&self, position: i16) {
        self.position.store(position, Ordering::Relaxed);
    }

    pub(crate) fn touch(&self, now: Cycles) {
        self.last_update.store(now, Ordering::Relaxed);
    }

    pub(crate) fn set_direction(&self, dir: Direction) {
        self.direction.store(dir.as_raw(), Ordering::Relaxed);
    }
}
