//! Remote control command table

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::frame::FRAME_LEN;

/// Preamble bytes sent by the projector remote
pub const PREAMBLE: [u8; 2] = [0xE0, 0xD5];

/// Command bytes `(upper, lower)` and the button they belong to
pub const COMMANDS: [(u8, u8, Button); 5] = [
    (0x04, 0xFB, Button::On),
    (0x44, 0xBB, Button::Off),
    (0x06, 0xF9, Button::Up),
    (0x26, 0xD9, Button::Down),
    (0x50, 0xAF, Button::Set),
];

/// Remote control buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Projector on
    On,
    /// Projector off
    Off,
    /// Cursor up
    Up,
    /// Cursor down
    Down,
    /// Setup
    Set,
    /// Anything else, including frames from other remotes
    Unknown,
}

/// How strictly the preamble is matched
///
/// The first firmware revision only rejected a frame when *both*
/// preamble bytes were wrong, so a frame with one correct preamble byte
/// and a known command was still accepted. `Lenient` keeps that
/// behavior; `Strict` requires both bytes to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PreambleCheck {
    /// Both preamble bytes must match
    #[default]
    Strict,
    /// Reject only when both preamble bytes differ
    Lenient,
}

impl PreambleCheck {
    /// Check the preamble of a frame
    pub fn accepts(self, first: u8, second: u8) -> bool {
        let first_ok = first == PREAMBLE[0];
        let second_ok = second == PREAMBLE[1];
        match self {
            PreambleCheck::Strict => first_ok && second_ok,
            PreambleCheck::Lenient => first_ok || second_ok,
        }
    }
}

/// Decode a complete frame into a button
pub fn decode(frame: &[u8; FRAME_LEN], check: PreambleCheck) -> Button {
    if !check.accepts(frame[0], frame[1]) {
        return Button::Unknown;
    }
    let (upper, lower) = (frame[2], frame[3]);
    COMMANDS
        .iter()
        .find(|&&(u, l, _)| u == upper && l == lower)
        .map(|&(_, _, button)| button)
        .unwrap_or(Button::Unknown)
}
