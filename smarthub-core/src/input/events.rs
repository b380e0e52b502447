//! Navigation events

/// Upper bound on events collected in one tick
pub const MAX_EVENTS_PER_TICK: usize = 8;

/// Events gathered from all sources during one tick
pub type Events = heapless::Vec<NavigationEvent, MAX_EVENTS_PER_TICK>;

/// Discrete user intent produced by a debounced input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavigationEvent {
    /// Nothing happened
    #[default]
    None,
    /// Go to the previous page
    Previous,
    /// Go to the next page
    Next,
    /// Confirm / press
    Select,
}

impl NavigationEvent {
    pub fn is_none(self) -> bool {
        self == NavigationEvent::None
    }
}
