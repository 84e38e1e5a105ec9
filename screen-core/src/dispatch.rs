//! Button dispatch policy
//!
//! On and Off double as the projector's power buttons. Pressing either
//! opens the extra-buttons window; while it is open, Up and Down jog the
//! screen directly. Outside the window they stop the motor, so the
//! cursor keys can be used on the projector menu without moving the
//! screen.

use screen_hal::TickCounter;

use crate::controller::ScreenController;
use crate::infrared::Button;
use crate::monoflop::Monoflop;
use crate::state::{Direction, Fault};
use crate::traits::{LimitSwitch, MotorBridge};

/// Apply a decoded button to the controller
pub fn dispatch<C, M, S>(
    button: Button,
    controller: &mut ScreenController<'_, C, M, S>,
    extra_buttons: &mut Monoflop<C>,
) where
    C: TickCounter,
    M: MotorBridge,
    S: LimitSwitch,
{
    match button {
        Button::On => {
            if controller.error() == Some(Fault::Rotation) {
                // Recovery attempt
                controller.go_home();
            } else {
                controller.set_direction(Direction::Down);
                extra_buttons.trigger();
            }
        }
        Button::Off => {
            controller.set_direction(Direction::Up);
            extra_buttons.trigger();
        }
        Button::Up => controller.set_direction(jog(Direction::Up, extra_buttons)),
        Button::Down => controller.set_direction(jog(Direction::Down, extra_buttons)),
        Button::Set => {}
        Button::Unknown => controller.set_direction(Direction::Neutral),
    }
}

fn jog<C: TickCounter>(dir: Direction, extra_buttons: &Monoflop<C>) -> Direction {
    if extra_buttons.is_active() {
        dir
    } else {
        Direction::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::mock::MockTicks;
    use crate::clock::Clock;
    use crate::config::ScreenConfig;
    use crate::controller::mock::{MockBridge, MockSwitch, Rig};
    use crate::controller::RotationTracker;

    type TestController<'a> = ScreenController<'a, MockTicks<'a>, MockBridge<'a>, MockSwitch<'a>>;

    fn setup<'a>(
        rig: &'a Rig,
        tracker: &'a RotationTracker,
    ) -> (TestController<'a>, Monoflop<MockTicks<'a>>) {
        let config = ScreenConfig::default();
        let clock = Clock::new(MockTicks(&rig.ticks));
        let motor = MockBridge {
            up: &rig.up,
            down: &rig.down,
            writes: &rig.writes,
        };
        let ctl = ScreenController::new(clock, motor, MockSwitch(&rig.endswitch), tracker, &config);
        let flop = Monoflop::new(
            clock,
            Clock::<MockTicks>::ms_to_cycles(config.timing.extra_buttons_ms),
        );
        (ctl, flop)
    }

    #[test]
    fn test_on_rolls_down_and_opens_window() {
        let rig = Rig::default();
        let tracker = RotationTracker::new();
        let (mut ctl, mut flop) = setup(&rig, &tracker);

        dispatch(Button::On, &mut ctl, &mut flop);
        assert_eq!(ctl.direction(), Direction::Down);
        assert!(flop.is_active());
    }

    #[test]
    fn test_off_rolls_up_and_opens_window() {
        let rig = Rig::default();
        let tracker = RotationTracker::new();
        let (mut ctl, mut flop) = setup(&rig, &tracker);

        tracker.set_position(100);
        dispatch(Button::Off, &mut ctl, &mut flop);
        assert_eq!(ctl.direction(), Direction::Up);
        assert!(flop.is_active());
    }

    #[test]
    fn test_on_after_rotation_fault_goes_home() {
        let rig = Rig::default();
        let tracker = RotationTracker::new();
        let (mut ctl, mut flop) = setup(&rig, &tracker);

        ctl.enter_error_state(Fault::Rotation);
        dispatch(Button::On, &mut ctl, &mut flop);

        assert_eq!(ctl.error(), None);
        assert_eq!(ctl.direction(), Direction::Up);
        assert_eq!(ctl.position(), ctl.limits().down_stop);
        assert!(!flop.is_active());
    }

    #[test]
    fn test_jog_only_inside_window() {
        let rig = Rig::default();
        let tracker = RotationTracker::new();
        let (mut ctl, mut flop) = setup(&rig, &tracker);
        tracker.set_position(100);

        // Window closed: cursor keys stop the motor
        ctl.set_direction(Direction::Down);
        dispatch(Button::Up, &mut ctl, &mut flop);
        assert_eq!(ctl.direction(), Direction::Neutral);
        dispatch(Button::Down, &mut ctl, &mut flop);
        assert_eq!(ctl.direction(), Direction::Neutral);

        dispatch(Button::On, &mut ctl, &mut flop);
        dispatch(Button::Up, &mut ctl, &mut flop);
        assert_eq!(ctl.direction(), Direction::Up);
        dispatch(Button::Down, &mut ctl, &mut flop);
        assert_eq!(ctl.direction(), Direction::Down);

        // Window expired
        rig.ticks.set(flop.duration());
        dispatch(Button::Up, &mut ctl, &mut flop);
        assert_eq!(ctl.direction(), Direction::Neutral);
    }

    #[test]
    fn test_set_is_ignored() {
        let rig = Rig::default();
        let tracker = RotationTracker::new();
        let (mut ctl, mut flop) = setup(&rig, &tracker);

        ctl.set_direction(Direction::Down);
        let writes = rig.writes.get();
        dispatch(Button::Set, &mut ctl, &mut flop);
        assert_eq!(ctl.direction(), Direction::Down);
        assert_eq!(rig.writes.get(), writes);
        assert!(!flop.is_active());
    }

    #[test]
    fn test_unknown_stops() {
        let rig = Rig::default();
        let tracker = RotationTracker::new();
        let (mut ctl, mut flop) = setup(&rig, &tracker);

        ctl.set_direction(Direction::Down);
        dispatch(Button::Unknown, &mut ctl, &mut flop);
        assert_eq!(ctl.direction(), Direction::Neutral);
    }
}
