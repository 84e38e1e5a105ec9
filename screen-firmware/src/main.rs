//! rc-screen - Motorized Projection Screen Firmware
//!
//! Main firmware binary for RP2040-based screen controllers. A consumer
//! infrared remote rolls the screen up and down; a rotation sensor and an
//! endswitch keep track of where it is.
//!
//! Two execution contexts:
//!
//! - The rotation edge task on a high-priority interrupt executor
//! - The blocking main loop in thread mode (see `screen_core::app`)
//!
//! They share nothing but the `ROTATION` tracker.

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::*;
use embassy_executor::InterruptExecutor;
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use screen_core::state::StopReason;
use screen_core::{Clock, LoopReport, RotationTracker, ScreenApp};
use screen_drivers::infrared::PulseDistanceReceiver;
use screen_drivers::motor::HBridge;
use screen_drivers::sensor::EndSwitch;
use screen_hal_rp2040::{EmbassyTicks, RpInput, RpOutput};

mod board;
mod config;
mod tasks;

/// Motion state shared with the rotation edge task
static ROTATION: RotationTracker = RotationTracker::new();

static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_HIGH.on_interrupt()
}

/// Main entry point
#[entry]
fn main() -> ! {
    info!("rc-screen firmware starting...");

    let p = embassy_rp::init(Default::default());
    let board = board::Board::new(p);
    info!("Peripherals initialized");

    let config = config::load();

    // Rotation edges preempt the main loop
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let spawner = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
    spawner.spawn(unwrap!(tasks::rotation_task(
        board.comparator,
        RpOutput::new(board.bias),
        &ROTATION,
    )));

    let mut app = ScreenApp::new(
        Clock::new(EmbassyTicks),
        HBridge::new(RpOutput::new(board.motor_up), RpOutput::new(board.motor_down)),
        EndSwitch::active_low(RpInput::new(board.endswitch)),
        &ROTATION,
        PulseDistanceReceiver::new(RpInput::new(board.ir), Delay, config.infrared.timing()),
        RpOutput::new(board.led),
        &config,
    );

    // Position is not retained across power loss, so run() homes first
    info!("Homing");
    let mut at_home = false;
    app.run(|app, report| {
        log_report(report);

        if report.endswitch != at_home {
            at_home = report.endswitch;
            if at_home {
                info!("Endswitch asserted, position {}", app.controller().position());
            } else {
                debug!("Endswitch released");
            }
        }
    })
}

/// Log what one loop iteration did
fn log_report(report: &LoopReport) {
    match report.stop {
        Some(StopReason::Fault(fault)) => {
            if fault.is_recoverable() {
                error!("Fault: {}, motor stopped; press On to re-home", fault);
            } else {
                error!("Fault: {}, motor stopped until reset", fault);
            }
        }
        Some(StopReason::LimitReached(dir)) => {
            info!("Stopped at {} limit", dir);
        }
        None => {}
    }

    if let Some(frame) = &report.frame {
        match report.button {
            Some(button) => info!("IR {} -> {}", frame, button),
            None => debug!("Ignored incomplete IR frame: {}", frame),
        }
    }
}
