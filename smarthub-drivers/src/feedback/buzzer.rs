//! GPIO buzzer output
//!
//! Active buzzer driven directly from a GPIO pin (or via a transistor).

use smarthub_hal::OutputPin;

/// GPIO buzzer
///
/// The pin can be configured as active-high (default) or active-low.
pub struct Buzzer<P> {
    pin: P,
    /// If true, buzzer ON = pin LOW
    inverted: bool,
    /// Current logical state (true = sounding)
    on: bool,
}

impl<P: OutputPin> Buzzer<P> {
    /// Create a new buzzer output
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, the buzzer sounds when the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut buzzer = Self {
            pin,
            inverted,
            on: false,
        };
        // Ensure buzzer starts silent
        buzzer.set_on(false);
        buzzer
    }

    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Switch the buzzer on or off
    pub fn set_on(&mut self, on: bool) {
        self.on = on;

        if on != self.inverted {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
    }

    pub fn toggle(&mut self) {
        self.set_on(!self.on);
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockPin {
        high: bool,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_active_high_buzzer() {
        let mut buzzer = Buzzer::new_active_high(MockPin { high: true });

        // Silenced on construction
        assert!(!buzzer.is_on());
        assert!(!buzzer.pin.is_set_high());

        buzzer.set_on(true);
        assert!(buzzer.pin.is_set_high());

        buzzer.toggle();
        assert!(!buzzer.is_on());
        assert!(!buzzer.pin.is_set_high());
    }

    #[test]
    fn test_active_low_buzzer() {
        let mut buzzer = Buzzer::new_active_low(MockPin { high: false });

        // Silent means the pin idles high
        assert!(buzzer.pin.is_set_high());

        buzzer.set_on(true);
        assert!(buzzer.is_on());
        assert!(!buzzer.pin.is_set_high());
    }
}
