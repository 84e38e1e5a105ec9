//! Infrared receiver trait

use crate::infrared::InfraredFrame;

/// Source of raw infrared frames
pub trait InfraredReceiver {
    /// Check if a transmission has started (line asserted low)
    fn signal_started(&self) -> bool;

    /// Capture one frame
    ///
    /// Blocks the caller until a full frame was read or the end-of-signal
    /// condition was observed. Frames with fewer than four bytes are
    /// returned as-is; the caller decides what to do with them.
    fn read_frame(&mut self) -> InfraredFrame;
}
