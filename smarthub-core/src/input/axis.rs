//! Analog axes: potentiometer and joystick

use smarthub_hal::AnalogInput;

use super::debounce::{DebounceTiming, Debouncer};
use super::events::NavigationEvent;
use crate::config::InputConfig;

/// Zone of a 12-bit axis reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxisZone {
    /// Below the low threshold
    Low,
    /// Inside the deadband (no intent)
    Center,
    /// Above the high threshold
    High,
}

/// Deadband thresholds for an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisDeadband {
    pub low: u16,
    pub high: u16,
    /// Swap Previous/Next (axis mounted the other way round)
    pub invert: bool,
}

impl AxisDeadband {
    pub fn from_config(config: &InputConfig) -> Self {
        Self {
            low: config.axis_low,
            high: config.axis_high,
            invert: false,
        }
    }

    pub fn inverted(self) -> Self {
        Self {
            invert: !self.invert,
            ..self
        }
    }

    /// Classify a raw reading
    pub fn classify(&self, raw: u16) -> AxisZone {
        if raw < self.low {
            AxisZone::Low
        } else if raw > self.high {
            AxisZone::High
        } else {
            AxisZone::Center
        }
    }

    fn event_for(&self, zone: AxisZone) -> NavigationEvent {
        match (zone, self.invert) {
            (AxisZone::Low, false) | (AxisZone::High, true) => NavigationEvent::Previous,
            (AxisZone::High, false) | (AxisZone::Low, true) => NavigationEvent::Next,
            (AxisZone::Center, _) => NavigationEvent::None,
        }
    }
}

impl Default for AxisDeadband {
    fn default() -> Self {
        Self::from_config(&InputConfig::default())
    }
}

/// Single analog axis with deadband and debouncing
///
/// Holding the axis off-center repeats the event every
/// `cooldown + window`.
pub struct AxisInput<A> {
    adc: A,
    deadband: AxisDeadband,
    debouncer: Debouncer<AxisZone>,
}

impl<A: AnalogInput> AxisInput<A> {
    pub fn new(adc: A, deadband: AxisDeadband, timing: DebounceTiming) -> Self {
        Self {
            adc,
            deadband,
            debouncer: Debouncer::new(AxisZone::Center, timing),
        }
    }

    /// Sample the axis and run the debouncer
    pub fn poll_event(&mut self, now_ms: u64) -> NavigationEvent {
        let zone = self.deadband.classify(self.adc.read());
        match self.debouncer.poll(zone, now_ms) {
            Some(zone) => self.deadband.event_for(zone),
            None => NavigationEvent::None,
        }
    }

    /// Debounced zone
    pub fn zone(&self) -> AxisZone {
        self.debouncer.stable()
    }
}

/// Two-axis joystick
///
/// Both axes are polled every tick so their debounce state stays current.
/// When both emit in the same tick the X axis wins.
pub struct Joystick<X, Y> {
    x: AxisInput<X>,
    y: AxisInput<Y>,
}

impl<X: AnalogInput, Y: AnalogInput> Joystick<X, Y> {
    pub fn new(x: AxisInput<X>, y: AxisInput<Y>) -> Self {
        Self { x, y }
    }

    pub fn poll_event(&mut self, now_ms: u64) -> NavigationEvent {
        let x = self.x.poll_event(now_ms);
        let y = self.y.poll_event(now_ms);
        if x.is_none() {
            y
        } else {
            x
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct MockAdc<'a>(&'a Cell<u16>);

    impl AnalogInput for MockAdc<'_> {
        fn read(&mut self) -> u16 {
            self.0.get()
        }
    }

    const TIMING: DebounceTiming = DebounceTiming {
        window_ms: 100,
        cooldown_ms: 300,
        repeat: true,
    };

    #[test]
    fn test_classify() {
        let db = AxisDeadband::default();
        assert_eq!(db.classify(0), AxisZone::Low);
        assert_eq!(db.classify(999), AxisZone::Low);
        assert_eq!(db.classify(1000), AxisZone::Center);
        assert_eq!(db.classify(2048), AxisZone::Center);
        assert_eq!(db.classify(3000), AxisZone::Center);
        assert_eq!(db.classify(3001), AxisZone::High);
        assert_eq!(db.classify(4095), AxisZone::High);
    }

    #[test]
    fn test_axis_push_and_hold() {
        let raw = Cell::new(2048);
        let mut axis = AxisInput::new(MockAdc(&raw), AxisDeadband::default(), TIMING);

        assert_eq!(axis.poll_event(0), NavigationEvent::None);

        raw.set(3500);
        assert_eq!(axis.poll_event(10), NavigationEvent::None);
        assert_eq!(axis.poll_event(110), NavigationEvent::Next);

        // Held: repeats after cooldown plus a fresh window
        let mut events = 0;
        let mut t = 120;
        while t < 1000 {
            if axis.poll_event(t) == NavigationEvent::Next {
                events += 1;
            }
            t += 10;
        }
        assert_eq!(events, 2);
    }

    #[test]
    fn test_return_to_center_is_silent() {
        let raw = Cell::new(500);
        let mut axis = AxisInput::new(MockAdc(&raw), AxisDeadband::default(), TIMING);

        axis.poll_event(0);
        assert_eq!(axis.poll_event(100), NavigationEvent::Previous);

        raw.set(2048);
        for t in (110..1000).step_by(10) {
            assert_eq!(axis.poll_event(t), NavigationEvent::None);
        }
        assert_eq!(axis.zone(), AxisZone::Center);
    }

    #[test]
    fn test_inverted_axis() {
        let raw = Cell::new(100);
        let db = AxisDeadband::default().inverted();
        let mut axis = AxisInput::new(MockAdc(&raw), db, TIMING);

        axis.poll_event(0);
        assert_eq!(axis.poll_event(100), NavigationEvent::Next);
    }

    #[test]
    fn test_joystick_x_priority() {
        let x = Cell::new(3500);
        let y = Cell::new(500);
        let db = AxisDeadband::default();
        let mut stick = Joystick::new(
            AxisInput::new(MockAdc(&x), db, TIMING),
            AxisInput::new(MockAdc(&y), db, TIMING),
        );

        stick.poll_event(0);
        assert_eq!(stick.poll_event(100), NavigationEvent::Next);
    }

    #[test]
    fn test_joystick_y_when_x_centered() {
        let x = Cell::new(2048);
        let y = Cell::new(500);
        let db = AxisDeadband::default();
        let mut stick = Joystick::new(
            AxisInput::new(MockAdc(&x), db, TIMING),
            AxisInput::new(MockAdc(&y), db, TIMING),
        );

        stick.poll_event(0);
        assert_eq!(stick.poll_event(100), NavigationEvent::Previous);
    }
}
