//! Analog input abstraction
//!
//! All analog sources (light sensor, potentiometer, joystick axes) are
//! normalized to the 12-bit ADC convention.

/// Full-scale reading of a 12-bit ADC
pub const ADC_MAX: u16 = 4095;

/// Analog input channel
///
/// Implementations return a reading in `0..=ADC_MAX`. Boards with a
/// different native resolution scale to 12 bits before returning.
pub trait AnalogInput {
    /// Read the channel
    ///
    /// Takes `&mut self` because ADC conversions typically require mutable
    /// access to the converter.
    fn read(&mut self) -> u16;
}
