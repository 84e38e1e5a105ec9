//! Captured infrared frame and receiver timing

use heapless::Vec;

/// Number of bytes in a complete frame
pub const FRAME_LEN: usize = 4;

/// Bytes captured from one transmission
///
/// Holds between zero and [`FRAME_LEN`] fully received bytes. Only a
/// complete frame carries a command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InfraredFrame {
    bytes: Vec<u8, FRAME_LEN>,
}

impl InfraredFrame {
    /// Create an empty frame
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Append a fully received byte
    ///
    /// Returns `false` if the frame is already complete.
    pub fn push(&mut self, byte: u8) -> bool {
        self.bytes.push(byte).is_ok()
    }

    /// Number of bytes captured
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if nothing was captured
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Check if all [`FRAME_LEN`] bytes were captured
    pub fn is_complete(&self) -> bool {
        self.bytes.len() == FRAME_LEN
    }

    /// Captured bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The four frame bytes, if the frame is complete
    pub fn complete_bytes(&self) -> Option<[u8; FRAME_LEN]> {
        self.as_bytes().try_into().ok()
    }
}

impl From<[u8; FRAME_LEN]> for InfraredFrame {
    fn from(bytes: [u8; FRAME_LEN]) -> Self {
        let mut frame = Self::new();
        for byte in bytes {
            frame.push(byte);
        }
        frame
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for InfraredFrame {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=[u8]:x}", self.as_bytes())
    }
}

/// Receiver timing derived from the configured thresholds
///
/// The receiver samples the line every `sample_period_us` and counts
/// samples while the line is high. A count above `bit_threshold` is a
/// one bit; a count reaching `end_of_signal` ends the capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InfraredTiming {
    /// Delay between samples in microseconds
    pub sample_period_us: u32,
    /// High-phase sample count separating a 0 bit from a 1 bit
    pub bit_threshold: u32,
    /// High-phase sample count that terminates the frame
    pub end_of_signal: u32,
}

impl InfraredTiming {
    /// Build sample counts from microsecond thresholds
    ///
    /// A zero sample period is treated as 1 µs.
    pub const fn from_micros(
        sample_period_us: u32,
        bit_threshold_us: u32,
        end_of_signal_us: u32,
    ) -> Self {
        let period = if sample_period_us == 0 { 1 } else { sample_period_us };
        Self {
            sample_period_us: period,
            bit_threshold: bit_threshold_us / period,
            end_of_signal: end_of_signal_us / period,
        }
    }
}

impl Default for InfraredTiming {
    fn default() -> Self {
        // The busy loop on the first board counted about 539 iterations for
        // a 0 bit and 1500 for a 1 bit; the bit threshold sits between.
        Self::from_micros(2, 1016, 12_000)
    }
}
