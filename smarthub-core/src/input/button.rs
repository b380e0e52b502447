//! Debounced push button

use smarthub_hal::{InputPin, Level};

use super::debounce::{DebounceTiming, Debouncer};
use super::events::NavigationEvent;

/// Push button polled every tick
///
/// Emits its configured event once per press. Holding the button does not
/// repeat; releasing it is silent.
pub struct DebouncedButton<P> {
    pin: P,
    active: Level,
    event: NavigationEvent,
    debouncer: Debouncer<Level>,
}

impl<P: InputPin> DebouncedButton<P> {
    /// Create a button that reads `active` while pressed
    ///
    /// Buttons wired to ground with a pull-up are active-low.
    pub fn new(pin: P, active: Level, event: NavigationEvent, timing: DebounceTiming) -> Self {
        Self {
            pin,
            active,
            event,
            debouncer: Debouncer::new(!active, timing),
        }
    }

    /// Sample the pin and run the debouncer
    pub fn poll_event(&mut self, now_ms: u64) -> NavigationEvent {
        let raw = self.pin.level();
        match self.debouncer.poll(raw, now_ms) {
            Some(level) if level == self.active => self.event,
            _ => NavigationEvent::None,
        }
    }

    /// Check if the button is currently held (debounced)
    pub fn is_pressed(&self) -> bool {
        self.debouncer.stable() == self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct MockPin<'a>(&'a Cell<bool>);

    impl InputPin for MockPin<'_> {
        fn is_high(&self) -> bool {
            self.0.get()
        }
    }

    #[test]
    fn test_active_low_press() {
        let line = Cell::new(true);
        let mut button = DebouncedButton::new(
            MockPin(&line),
            Level::Low,
            NavigationEvent::Next,
            DebounceTiming::default(),
        );

        assert_eq!(button.poll_event(0), NavigationEvent::None);

        line.set(false);
        assert_eq!(button.poll_event(10), NavigationEvent::None);
        assert_eq!(button.poll_event(110), NavigationEvent::Next);
        assert!(button.is_pressed());

        // Held: nothing more
        assert_eq!(button.poll_event(500), NavigationEvent::None);
        assert_eq!(button.poll_event(2000), NavigationEvent::None);

        // Release is silent
        line.set(true);
        assert_eq!(button.poll_event(2010), NavigationEvent::None);
        assert_eq!(button.poll_event(2110), NavigationEvent::None);
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_active_high_select() {
        let line = Cell::new(false);
        let mut button = DebouncedButton::new(
            MockPin(&line),
            Level::High,
            NavigationEvent::Select,
            DebounceTiming::default(),
        );

        line.set(true);
        button.poll_event(0);
        assert_eq!(button.poll_event(100), NavigationEvent::Select);
    }
}
