//! Status renderer trait

use crate::alarm::AlarmState;
use crate::menu::Page;
use crate::sensor::SensorSnapshot;

/// Everything the status screen shows
///
/// Rebuilt every tick and compared against the last rendered view to decide
/// whether a redraw is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusView {
    /// Page currently selected in the menu
    pub page: Page,
    /// Latest sensor snapshot
    pub snapshot: SensorSnapshot,
    /// Alarm state evaluated from `snapshot`
    pub alarm: AlarmState,
    /// Threshold in effect
    pub threshold: u16,
    /// Seconds since `start()`
    pub uptime_s: u32,
}

/// Trait for the status screen
///
/// Turns a [`StatusView`] into draw commands on some display surface.
pub trait StatusRenderer {
    /// Error type reported by the underlying surface
    type Error;

    /// Bring up the display and draw the boot screen
    ///
    /// Failure here is fatal: the unit never runs without a display.
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Draw the given view
    fn render(&mut self, view: &StatusView) -> Result<(), Self::Error>;
}
