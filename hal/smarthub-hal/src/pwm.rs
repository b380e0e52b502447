//! PWM output abstraction

/// PWM output channel with an 8-bit duty cycle
///
/// Used for the RGB status LED channels. `0` is fully off, `255` fully on.
pub trait PwmOutput {
    /// Set the duty cycle (0-255)
    fn set_duty(&mut self, duty: u8);

    /// Get the last duty cycle set
    fn duty(&self) -> u8;
}
