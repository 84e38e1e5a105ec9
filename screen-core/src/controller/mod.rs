//! Screen state machine
//!
//! [`ScreenController`] owns the motor, the endswitch, the fault state and
//! (through the shared [`RotationTracker`]) the position model. It decides
//! when motion is allowed, when it has to stop, and which faults latch.
//!
//! # Stop conditions
//!
//! - Up: any fault, `position <= up_stop`, or endswitch asserted
//! - Down: any fault, or `position >= down_stop`
//!
//! # Faults
//!
//! - [`Fault::Rotation`]: the motor is commanded to move but no encoder
//!   tick arrived within the rotation timeout. Cleared by [`go_home`].
//! - [`Fault::Switch`]: moving up past `up_stop` without the endswitch
//!   ever asserting. Sticky until reset; [`go_home`] is a no-op.
//!
//! [`go_home`]: ScreenController::go_home

pub mod rotation;

pub use rotation::RotationTracker;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use screen_hal::{Cycles, TickCounter};

use crate::clock::Clock;
use crate::config::{ScreenConfig, TravelLimits};
use crate::state::{Direction, Fault, StopReason};
use crate::traits::{LimitSwitch, MotorBridge};

/// How an asserted endswitch updates the position model
///
/// The switch is only expected to assert near the top of travel. While
/// rolling down, an assertion is most likely bounce from just having left
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EndswitchPolicy {
    /// Reset position to home unless moving down
    #[default]
    IgnoreWhileDown,
    /// Reset position to home on every assertion
    AlwaysHome,
}

/// Motorized screen controller
pub struct ScreenController<'r, C, M, S> {
    clock: Clock<C>,
    motor: M,
    endswitch: S,
    tracker: &'r RotationTracker,
    limits: TravelLimits,
    rotation_timeout: Cycles,
    endswitch_policy: EndswitchPolicy,
    error: Option<Fault>,
}

impl<'r, C, M, S> ScreenController<'r, C, M, S>
where
    C: TickCounter,
    M: MotorBridge,
    S: LimitSwitch,
{
    /// Create a controller
    ///
    /// The motor is switched off and the tracker reset to position 0,
    /// not moving. Call [`go_home`](Self::go_home) to establish the
    /// real position.
    pub fn new(
        clock: Clock<C>,
        mut motor: M,
        endswitch: S,
        tracker: &'r RotationTracker,
        config: &ScreenConfig,
    ) -> Self {
        motor.drive(Direction::Neutral);
        tracker.set_direction(Direction::Neutral);
        tracker.set_position(0);

        Self {
            clock,
            motor,
            endswitch,
            tracker,
            limits: config.travel,
            rotation_timeout: Clock::<C>::ms_to_cycles(config.timing.rotation_timeout_ms),
            endswitch_policy: config.endswitch.policy,
            error: None,
        }
    }

    /// Command a direction, honoring the travel limits
    ///
    /// No-op if `dir` is already the current direction. Up and Down are
    /// silently refused while their stop condition holds. Neutral always
    /// succeeds.
    pub fn set_direction(&mut self, dir: Direction) {
        if dir == self.direction() {
            return;
        }
        let allowed = match dir {
            Direction::Up => !self.up_stop_condition(),
            Direction::Down => !self.down_stop_condition(),
            Direction::Neutral => true,
        };
        if !allowed {
            return;
        }

        self.motor.drive(dir);
        // The timestamp must be fresh before the interrupt side sees the
        // new direction, or the stall check could fire right away.
        if dir.is_moving() {
            self.tracker.touch(self.clock.now());
        }
        self.tracker.set_direction(dir);
    }

    /// Move towards the home position, clearing a rotation fault
    ///
    /// Does nothing while a switch fault is latched. If the endswitch is
    /// already asserted the current position is taken as home. Otherwise
    /// the position is set to the far limit (we might be anywhere, but
    /// never further than that) and the screen rolls up until the
    /// endswitch stops it.
    pub fn go_home(&mut self) {
        if self.error == Some(Fault::Switch) {
            return;
        }
        self.error = None;
        if self.endswitch.is_triggered() {
            return;
        }
        self.tracker.set_position(self.limits.down_stop);
        self.set_direction(Direction::Up);
    }

    /// Encoder tick event
    ///
    /// Normally the interrupt handler calls
    /// [`RotationTracker::rotation_tick`] directly; this is the same event
    /// for callers that own the controller.
    pub fn event_rotation_tick(&self) {
        self.tracker.rotation_tick(self.clock.now());
    }

    /// Endswitch asserted event
    pub fn event_endswitch_triggered(&mut self) {
        let reset = match self.endswitch_policy {
            EndswitchPolicy::IgnoreWhileDown => self.direction() != Direction::Down,
            EndswitchPolicy::AlwaysHome => true,
        };
        if reset {
            self.tracker.set_position(0);
        }
    }

    /// Check fault and stop conditions; stop the motor if needed
    ///
    /// Must be called regularly, at least once per counter rollover
    /// period.
    pub fn check_stop_conditions(&mut self) -> Option<StopReason> {
        let dir = self.direction();
        if dir.is_moving()
            && self
                .clock
                .has_elapsed(self.tracker.last_update(), self.rotation_timeout)
        {
            // Encoder failed or motor stuck
            self.enter_error_state(Fault::Rotation);
            return Some(StopReason::Fault(Fault::Rotation));
        }
        if dir == Direction::Up && self.position() <= self.limits.up_stop {
            // Passed home without the endswitch asserting
            self.enter_error_state(Fault::Switch);
            return Some(StopReason::Fault(Fault::Switch));
        }

        let stop = match dir {
            Direction::Up => self.up_stop_condition(),
            Direction::Down => self.down_stop_condition(),
            Direction::Neutral => false,
        };
        if stop {
            self.set_direction(Direction::Neutral);
            return Some(StopReason::LimitReached(dir));
        }
        None
    }

    /// Stop the motor and latch a fault
    pub fn enter_error_state(&mut self, fault: Fault) {
        self.set_direction(Direction::Neutral);
        self.error = Some(fault);
    }

    /// Latched fault, if any
    pub fn error(&self) -> Option<Fault> {
        self.error
    }

    /// Commanded direction
    pub fn direction(&self) -> Direction {
        self.tracker.direction()
    }

    /// Position in encoder ticks (0 = home)
    pub fn position(&self) -> i16 {
        self.tracker.position()
    }

    /// Configured travel limits
    pub fn limits(&self) -> TravelLimits {
        self.limits
    }

    /// Logical endswitch state
    pub fn endswitch_triggered(&self) -> bool {
        self.endswitch.is_triggered()
    }

    fn up_stop_condition(&self) -> bool {
        self.error.is_some()
            || self.position() <= self.limits.up_stop
            || self.endswitch.is_triggered()
    }

    fn down_stop_condition(&self) -> bool {
        self.error.is_some() || self.position() >= self.limits.down_stop
    }
}
