//! Direction and fault definitions

/// Commanded motor direction
///
/// Exactly one H-bridge output pair corresponds to each variant;
/// `Neutral` means both outputs are off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Direction {
    /// Motor off
    #[default]
    Neutral = 0,
    /// Rolling the screen up, towards the endswitch (position decreases)
    Up = 1,
    /// Rolling the screen down (position increases)
    Down = 2,
}

impl Direction {
    /// Decode the raw value stored in an atomic
    ///
    /// Unknown values map to `Neutral`.
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            1 => Direction::Up,
            2 => Direction::Down,
            _ => Direction::Neutral,
        }
    }

    /// Raw value for atomic storage
    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// Check if the motor is commanded to move
    pub fn is_moving(&self) -> bool {
        !matches!(self, Direction::Neutral)
    }

    /// Position change caused by one rotation tick in this direction
    pub const fn step(self) -> i16 {
        match self {
            Direction::Neutral => 0,
            Direction::Up => -1,
            Direction::Down => 1,
        }
    }
}

/// Fault conditions that stop the motor
///
/// `None` (no fault) is represented as `Option::<Fault>::None` by the
/// controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fault {
    /// Position model says home was passed but the endswitch never fired.
    ///
    /// Sticky: only an external reset clears it.
    Switch,
    /// No encoder tick while the motor was commanded to move.
    ///
    /// Cleared by a successful homing run.
    Rotation,
}

impl Fault {
    /// Check if software can recover from this fault
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Fault::Rotation)
    }
}
