//! Infrared remote protocol
//!
//! The remote sends a pulse-distance encoded frame: the idle-high line is
//! pulled low for a long start pulse, then every bit is a short low pulse
//! followed by a high pulse whose length encodes the value (short = 0,
//! long = 1), most significant bit first. A frame is four bytes: a two
//! byte preamble identifying the remote and a two byte command.
//!
//! - [`frame`] - captured frame and receiver timing
//! - [`button`] - command table and decoding

pub mod button;
pub mod frame;

pub use button::{decode, Button, PreambleCheck, COMMANDS, PREAMBLE};
pub use frame::{InfraredFrame, InfraredTiming, FRAME_LEN};
