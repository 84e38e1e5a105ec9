//! Position sensor traits

/// Home position limit switch
///
/// Reports the logical (already inverted) switch state.
pub trait LimitSwitch {
    /// Check if the screen is at the home position
    fn is_triggered(&self) -> bool;
}
