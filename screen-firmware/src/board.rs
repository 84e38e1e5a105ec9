//! Board pin map
//!
//! Raspberry Pi Pico carrier board:
//!
//! | Signal      | GPIO | Notes                                  |
//! |-------------|------|----------------------------------------|
//! | IR receiver | 2    | idle high, pull-up                     |
//! | Endswitch   | 3    | active low, pull-up                    |
//! | Comparator  | 4    | rotation sensor comparator output      |
//! | Motor up    | 10   | H-bridge input A                       |
//! | Motor down  | 11   | H-bridge input B                       |
//! | Bias        | 12   | comparator hysteresis bias             |
//! | Status LED  | 25   | on-board LED                           |

use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::Peripherals;

/// Configured board I/O
pub struct Board {
    pub ir: Input<'static>,
    pub endswitch: Input<'static>,
    pub comparator: Input<'static>,
    pub motor_up: Output<'static>,
    pub motor_down: Output<'static>,
    pub bias: Output<'static>,
    pub led: Output<'static>,
}

impl Board {
    /// Configure all pins
    ///
    /// Outputs start low: motor off, bias low, LED off.
    pub fn new(p: Peripherals) -> Self {
        Self {
            ir: Input::new(p.PIN_2, Pull::Up),
            endswitch: Input::new(p.PIN_3, Pull::Up),
            comparator: Input::new(p.PIN_4, Pull::None),
            motor_up: Output::new(p.PIN_10, Level::Low),
            motor_down: Output::new(p.PIN_11, Level::Low),
            bias: Output::new(p.PIN_12, Level::Low),
            led: Output::new(p.PIN_25, Level::Low),
        }
    }
}
