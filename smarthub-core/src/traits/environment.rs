//! Environmental (temperature + humidity) sensor trait

/// Errors that can occur while reading a sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Sensor did not answer within its deadline
    Timeout,
    /// Frame received but its checksum did not match
    Checksum,
    /// Sensor has not produced a first reading yet
    NotReady,
    /// Reading outside the sensor's physical range
    OutOfRange,
}

/// Trait for combined temperature/humidity sensors
///
/// Values are fixed-point with 0.1 resolution: 45.5°C is returned as 455.
/// Each quantity fails independently so one bad field does not hide the
/// other.
pub trait EnvironmentalSensor {
    /// Read the temperature in °C × 10
    fn read_temperature_x10(&mut self) -> Result<i16, SensorError>;

    /// Read the relative humidity in % × 10
    fn read_humidity_x10(&mut self) -> Result<u16, SensorError>;
}

impl<T: EnvironmentalSensor + ?Sized> EnvironmentalSensor for &mut T {
    fn read_temperature_x10(&mut self) -> Result<i16, SensorError> {
        T::read_temperature_x10(self)
    }

    fn read_humidity_x10(&mut self) -> Result<u16, SensorError> {
        T::read_humidity_x10(self)
    }
}
