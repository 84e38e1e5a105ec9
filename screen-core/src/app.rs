//! Cooperative main loop
//!
//! [`ScreenApp`] ties the controller, the extra-buttons window, the
//! infrared receiver and the status LED together. One call to
//! [`ScreenApp::poll`] is one loop iteration:
//!
//! 1. stop-condition and fault check
//! 2. extra-buttons window expiry
//! 3. infrared: if a transmission started, read, decode and dispatch it
//! 4. endswitch: if asserted, fire the endswitch event
//! 5. status LED
//!
//! Step 3 busy-waits for the whole transmission (tens of milliseconds).
//! Everything else in the loop is suspended meanwhile; the stall check
//! tolerates that easily. Encoder ticks keep being counted since they
//! arrive in interrupt context.

use screen_hal::{OutputPin, TickCounter};

use crate::clock::Clock;
use crate::config::ScreenConfig;
use crate::controller::{RotationTracker, ScreenController};
use crate::dispatch::dispatch;
use crate::infrared::{decode, Button, InfraredFrame, PreambleCheck};
use crate::monoflop::Monoflop;
use crate::state::StopReason;
use crate::status::StatusPattern;
use crate::traits::{InfraredReceiver, LimitSwitch, MotorBridge};

/// What happened during one loop iteration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LoopReport {
    /// Motor stop issued by the stop-condition check
    pub stop: Option<StopReason>,
    /// Frame captured this iteration, complete or not
    pub frame: Option<InfraredFrame>,
    /// Button decoded from a complete frame and dispatched
    pub button: Option<Button>,
    /// Endswitch was asserted
    pub endswitch: bool,
}

/// Screen application: controller plus main loop policy
pub struct ScreenApp<'r, C, M, S, R, L> {
    controller: ScreenController<'r, C, M, S>,
    extra_buttons: Monoflop<C>,
    receiver: R,
    led: L,
    clock: Clock<C>,
    preamble: PreambleCheck,
}

impl<'r, C, M, S, R, L> ScreenApp<'r, C, M, S, R, L>
where
    C: TickCounter + Clone,
    M: MotorBridge,
    S: LimitSwitch,
    R: InfraredReceiver,
    L: OutputPin,
{
    /// Assemble the application
    ///
    /// `config` is expected to be validated already.
    pub fn new(
        clock: Clock<C>,
        motor: M,
        endswitch: S,
        tracker: &'r RotationTracker,
        receiver: R,
        mut led: L,
        config: &ScreenConfig,
    ) -> Self {
        led.set_low();
        let window = Clock::<C>::ms_to_cycles(config.timing.extra_buttons_ms);
        Self {
            controller: ScreenController::new(clock.clone(), motor, endswitch, tracker, config),
            extra_buttons: Monoflop::new(clock.clone(), window),
            receiver,
            led,
            clock,
            preamble: config.infrared.preamble,
        }
    }

    /// Boot homing
    ///
    /// Position is not kept across power loss, so the screen is always
    /// sent home first.
    pub fn start(&mut self) {
        self.controller.go_home();
    }

    /// Run one loop iteration
    pub fn poll(&mut self) -> LoopReport {
        let mut report = LoopReport {
            stop: self.controller.check_stop_conditions(),
            ..LoopReport::default()
        };
        self.extra_buttons.regular_check();

        if self.receiver.signal_started() {
            let frame = self.receiver.read_frame();
            // Incomplete frames carry no command
            if let Some(bytes) = frame.complete_bytes() {
                let button = decode(&bytes, self.preamble);
                dispatch(button, &mut self.controller, &mut self.extra_buttons);
                report.button = Some(button);
            }
            report.frame = Some(frame);
        }

        if self.controller.endswitch_triggered() {
            self.controller.event_endswitch_triggered();
            report.endswitch = true;
        }

        let pattern = self.status();
        self.led.set_state(pattern.level(self.clock.now()));
        report
    }

    /// Home, then poll forever
    ///
    /// `on_iteration` sees the application and the report after every
    /// loop iteration.
    pub fn run<F>(&mut self, mut on_iteration: F) -> !
    where
        F: FnMut(&Self, &LoopReport),
    {
        self.start();
        loop {
            let report = self.poll();
            on_iteration(self, &report);
        }
    }

    /// Current LED pattern
    pub fn status(&self) -> StatusPattern {
        StatusPattern::for_state(self.controller.error(), self.extra_buttons.is_active())
    }

    /// Check if Up/Down currently jog the screen
    pub fn extra_buttons_active(&self) -> bool {
        self.extra_buttons.is_active()
    }

    /// The screen controller
    pub fn controller(&self) -> &ScreenController<'r, C, M, S> {
        &self.controller
    }

    /// Mutable access to the screen controller
    pub fn controller_mut(&mut self) -> &mut ScreenController<'r, C, M, S> {
        &mut self.controller
    }
}
