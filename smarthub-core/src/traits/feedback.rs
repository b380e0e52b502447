//! Alarm feedback trait

use crate::alarm::AlarmState;

/// Trait for the audible/visual alarm outputs
///
/// Called once per sampling interval with the freshly evaluated state.
/// Implementations drive the buzzer and RGB LED directly; they have no
/// failure path.
pub trait AlarmIndicator {
    /// Reflect the given alarm state on the outputs
    fn indicate(&mut self, state: &AlarmState);
}

/// No feedback hardware fitted
impl AlarmIndicator for () {
    fn indicate(&mut self, _state: &AlarmState) {}
}
