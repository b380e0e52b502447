//! Snapshot value types

use crate::traits::SensorError;

/// A measurement that may be missing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reading<T> {
    /// Sensor produced a value
    Valid(T),
    /// Sensor failed for this sample
    Missing,
}

impl<T: Copy> Reading<T> {
    /// Get the value, if present
    pub fn value(&self) -> Option<T> {
        match self {
            Reading::Valid(v) => Some(*v),
            Reading::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Reading::Missing)
    }
}

impl<T> From<Result<T, SensorError>> for Reading<T> {
    fn from(result: Result<T, SensorError>) -> Self {
        match result {
            Ok(v) => Reading::Valid(v),
            Err(_) => Reading::Missing,
        }
    }
}

/// Distance from the ultrasonic ranger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Distance {
    /// Echo received; distance in centimetres
    Cm(u16),
    /// No echo before the deadline
    Invalid,
}

impl Distance {
    /// Convert an echo round-trip time to a distance
    ///
    /// Sound travels 0.034 cm/µs and the pulse covers the path twice, so
    /// `cm = µs × 17 / 1000`.
    ///
    /// Echoes under 59µs give `Cm(0)`, which is a valid reading and can
    /// raise a `DistanceBelow` alarm. Only a timeout is [`Distance::Invalid`].
    pub fn from_echo_us(echo_us: u32) -> Self {
        let cm = (echo_us as u64 * 17 / 1000).min(u16::MAX as u64);
        Distance::Cm(cm as u16)
    }

    /// Get the distance in centimetres, if valid
    pub fn cm(&self) -> Option<u16> {
        match self {
            Distance::Cm(cm) => Some(*cm),
            Distance::Invalid => None,
        }
    }
}

/// All readings taken at one instant
///
/// Replaced wholesale by the next sample, never patched field by field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorSnapshot {
    /// Temperature in °C × 10
    pub temperature_x10: Reading<i16>,
    /// Relative humidity in % × 10
    pub humidity_x10: Reading<u16>,
    /// Light level, raw 12-bit ADC
    pub light: u16,
    /// Ultrasonic distance
    pub distance: Distance,
    /// Auxiliary control position (potentiometer), raw 12-bit ADC
    pub aux_axis: u16,
    /// Clock time when the sample was taken
    pub taken_at_ms: u64,
}

impl SensorSnapshot {
    /// Snapshot shown before the first sample
    pub const EMPTY: Self = Self {
        temperature_x10: Reading::Missing,
        humidity_x10: Reading::Missing,
        light: 0,
        distance: Distance::Invalid,
        aux_axis: 0,
        taken_at_ms: 0,
    };
}

impl Default for SensorSnapshot {
    fn default() -> Self {
        Self::EMPTY
    }
}
