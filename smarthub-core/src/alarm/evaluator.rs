//! Alarm evaluator

use crate::config::{AlarmConfig, AlarmTrigger, ThresholdSource};
use crate::sensor::{Distance, Reading, SensorSnapshot};

/// Feedback LED color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorCode {
    /// Alarm
    Red,
    /// Comfortable temperature
    Green,
    /// Cold
    Blue,
    /// Hot
    Amber,
    /// No temperature reading
    Off,
}

impl ColorCode {
    /// 8-bit duty for each LED channel as `(r, g, b)`
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            ColorCode::Red => (255, 0, 0),
            ColorCode::Green => (0, 255, 0),
            ColorCode::Blue => (0, 0, 255),
            ColorCode::Amber => (255, 165, 0),
            ColorCode::Off => (0, 0, 0),
        }
    }
}

/// Evaluated alarm condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AlarmState {
    pub active: bool,
    pub color: ColorCode,
}

impl AlarmState {
    /// State before the first sample
    pub const IDLE: Self = Self {
        active: false,
        color: ColorCode::Off,
    };
}

impl Default for AlarmState {
    fn default() -> Self {
        Self::IDLE
    }
}

/// Alarm evaluator
///
/// Owns the current threshold. [`evaluate`](Self::evaluate) itself is a pure
/// function of its arguments.
#[derive(Debug, Clone)]
pub struct AlarmEvaluator {
    trigger: AlarmTrigger,
    source: ThresholdSource,
    cold_below_x10: i16,
    hot_above_x10: i16,
    threshold: u16,
}

impl AlarmEvaluator {
    pub fn new(config: &AlarmConfig) -> Self {
        Self {
            trigger: config.trigger,
            source: config.threshold,
            cold_below_x10: config.cold_below_x10,
            hot_above_x10: config.hot_above_x10,
            threshold: config.threshold.derive(0),
        }
    }

    /// Current threshold
    pub fn threshold(&self) -> u16 {
        self.threshold
    }

    /// Re-derive the threshold from the auxiliary control position
    pub fn update_threshold(&mut self, aux_axis: u16) -> u16 {
        self.threshold = self.source.derive(aux_axis);
        self.threshold
    }

    /// Evaluate a snapshot against a threshold
    ///
    /// An alarm always shows red. Otherwise the color follows the
    /// temperature band, or is off when the temperature is missing.
    pub fn evaluate(&self, snapshot: &SensorSnapshot, threshold: u16) -> AlarmState {
        let active = match self.trigger {
            AlarmTrigger::DistanceBelow => match snapshot.distance {
                Distance::Cm(cm) => cm < threshold,
                Distance::Invalid => false,
            },
            AlarmTrigger::LightAbove => snapshot.light > threshold,
        };

        let color = if active {
            ColorCode::Red
        } else {
            self.comfort_color(snapshot.temperature_x10)
        };

        AlarmState { active, color }
    }

    /// Update the threshold from the snapshot and evaluate it
    pub fn assess(&mut self, snapshot: &SensorSnapshot) -> AlarmState {
        let threshold = self.update_threshold(snapshot.aux_axis);
        self.evaluate(snapshot, threshold)
    }

    fn comfort_color(&self, temperature_x10: Reading<i16>) -> ColorCode {
        match temperature_x10 {
            Reading::Missing => ColorCode::Off,
            Reading::Valid(t) if t < self.cold_below_x10 => ColorCode::Blue,
            Reading::Valid(t) if t > self.hot_above_x10 => ColorCode::Amber,
            Reading::Valid(_) => ColorCode::Green,
        }
    }
}
