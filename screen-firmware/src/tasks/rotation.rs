//! Rotation sensor edge task
//!
//! Runs on the high-priority interrupt executor, so it preempts the
//! blocking main loop the same way a pin-change interrupt would. It only
//! touches the shared rotation tracker, never the controller.

use defmt::*;
use embassy_rp::gpio::Input;
use screen_core::{Clock, RotationTracker};
use screen_drivers::rotation::ComparatorEdge;
use screen_hal_rp2040::{EmbassyTicks, RpOutput};

/// Rotation edge task
///
/// Waits for comparator edges, counts them as rotation ticks and drives
/// the hysteresis bias output.
#[embassy_executor::task]
pub async fn rotation_task(
    mut comparator: Input<'static>,
    bias: RpOutput<'static>,
    tracker: &'static RotationTracker,
) {
    info!("Rotation task started");

    let clock = Clock::new(EmbassyTicks);
    let mut edge = ComparatorEdge::new(bias, tracker);

    loop {
        comparator.wait_for_any_edge().await;
        if edge.on_level(comparator.is_low(), clock.now()) {
            trace!("Rotation tick, position {}", tracker.position());
        }
    }
}
