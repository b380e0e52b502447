//! Configuration type definitions
//!
//! Every field has a default matching the reference SmartHub wiring, so a
//! partial configuration file only needs to name what it changes.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use smarthub_hal::ADC_MAX;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Sampling interval or pulse timeout is zero
    InvalidInterval,
    /// Axis deadband is empty or outside the 12-bit range
    InvalidDeadband,
    /// Mapped threshold range has `min > max`
    InvalidThresholdRange,
    /// Temperature bands overlap (`cold_below > hot_above`)
    InvalidBands,
    /// Serialized configuration could not be decoded
    Decode,
}

/// Sensor sampling configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct SamplingConfig {
    /// Minimum time between two sensor samples (ms)
    pub interval_ms: u32,
    /// Hard upper bound on an ultrasonic echo measurement (µs)
    pub pulse_timeout_us: u32,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            interval_ms: 500,
            pulse_timeout_us: 30_000,
        }
    }
}

/// Navigation input configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct InputConfig {
    /// Time a new level must persist before it is accepted (ms)
    pub debounce_ms: u32,
    /// Minimum time between two button events (ms)
    pub button_cooldown_ms: u32,
    /// Minimum time between two events from an analog axis (ms)
    pub axis_cooldown_ms: u32,
    /// Axis readings below this mean "previous"
    pub axis_low: u16,
    /// Axis readings above this mean "next"
    pub axis_high: u16,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 100,
            button_cooldown_ms: 300,
            axis_cooldown_ms: 300,
            axis_low: 1000,
            axis_high: 3000,
        }
    }
}

/// Which measurement raises the alarm, and in which direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum AlarmTrigger {
    /// Something closer than the threshold (cm)
    #[default]
    DistanceBelow,
    /// Light level above the threshold (raw ADC)
    LightAbove,
}

/// Where the alarm threshold comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ThresholdSource {
    /// Constant threshold
    Fixed(u16),
    /// Auxiliary control position (0-4095) mapped linearly onto `[min, max]`
    Mapped { min: u16, max: u16 },
}

impl Default for ThresholdSource {
    fn default() -> Self {
        ThresholdSource::Mapped { min: 2, max: 100 }
    }
}

/// Alarm and comfort-color configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct AlarmConfig {
    /// Alarm polarity for the deployed sensor set
    pub trigger: AlarmTrigger,
    /// Threshold derivation
    pub threshold: ThresholdSource,
    /// Below this temperature the LED shows "cold" (°C × 10)
    pub cold_below_x10: i16,
    /// Above this temperature the LED shows "hot" (°C × 10)
    pub hot_above_x10: i16,
}

impl Default for AlarmConfig {
    fn default() -> Self {
        Self {
            trigger: AlarmTrigger::DistanceBelow,
            threshold: ThresholdSource::default(),
            cold_below_x10: 200, // 20.0°C
            hot_above_x10: 280,  // 28.0°C
        }
    }
}

/// When the status screen is redrawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum RedrawPolicy {
    /// Every tick
    Always,
    /// Only when the rendered view changed
    #[default]
    OnChange,
}

/// Display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct DisplayConfig {
    /// Redraw gating
    pub redraw: RedrawPolicy,
    /// Light readings below this are reported as "dark"
    pub dark_below: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            redraw: RedrawPolicy::OnChange,
            dark_below: 1000,
        }
    }
}

/// Complete unit configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct HubConfig {
    pub sampling: SamplingConfig,
    pub input: InputConfig,
    pub alarm: AlarmConfig,
    pub display: DisplayConfig,
}

impl HubConfig {
    /// Check cross-field constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sampling.interval_ms == 0 || self.sampling.pulse_timeout_us == 0 {
            return Err(ConfigError::InvalidInterval);
        }

        if self.input.axis_low >= self.input.axis_high || self.input.axis_high > ADC_MAX {
            return Err(ConfigError::InvalidDeadband);
        }

        if let ThresholdSource::Mapped { min, max } = self.alarm.threshold {
            if min > max {
                return Err(ConfigError::InvalidThresholdRange);
            }
        }

        if self.alarm.cold_below_x10 > self.alarm.hot_above_x10 {
            return Err(ConfigError::InvalidBands);
        }

        Ok(())
    }

    /// Decode and validate a postcard-serialized configuration
    #[cfg(feature = "serde")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: HubConfig = postcard::from_bytes(bytes).map_err(|_| ConfigError::Decode)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(HubConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_reference_defaults() {
        let config = HubConfig::default();
        assert_eq!(config.sampling.interval_ms, 500);
        assert_eq!(config.sampling.pulse_timeout_us, 30_000);
        assert_eq!(config.input.debounce_ms, 100);
        assert_eq!(config.input.axis_cooldown_ms, 300);
        assert_eq!(config.input.axis_low, 1000);
        assert_eq!(config.input.axis_high, 3000);
        assert_eq!(config.alarm.trigger, AlarmTrigger::DistanceBelow);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let mut config = HubConfig::default();
        config.sampling.interval_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidInterval));
    }

    #[test]
    fn test_inverted_deadband_rejected() {
        let mut config = HubConfig::default();
        config.input.axis_low = 3000;
        config.input.axis_high = 1000;
        assert_eq!(config.validate(), Err(ConfigError::InvalidDeadband));

        config.input.axis_low = 1000;
        config.input.axis_high = 5000;
        assert_eq!(config.validate(), Err(ConfigError::InvalidDeadband));
    }

    #[test]
    fn test_threshold_range_rejected() {
        let mut config = HubConfig::default();
        config.alarm.threshold = ThresholdSource::Mapped { min: 50, max: 10 };
        assert_eq!(config.validate(), Err(ConfigError::InvalidThresholdRange));

        // Fixed thresholds have no range to check
        config.alarm.threshold = ThresholdSource::Fixed(10);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_overlapping_bands_rejected() {
        let mut config = HubConfig::default();
        config.alarm.cold_below_x10 = 300;
        assert_eq!(config.validate(), Err(ConfigError::InvalidBands));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_garbage_bytes_rejected() {
        assert_eq!(HubConfig::from_bytes(&[]), Err(ConfigError::Decode));
    }
}
