//! Echo pulse timing
//!
//! Ultrasonic rangers answer a trigger pulse with an echo pulse whose width
//! is the sound round-trip time. Measuring it is the only blocking operation
//! the control loop tolerates, so every implementation must honor a hard
//! timeout.

/// No echo was observed before the deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseTimeout;

/// Trigger/echo pulse measurement
pub trait PulseTimer {
    /// Fire a trigger pulse and measure the echo width in microseconds
    ///
    /// Must return `Err(PulseTimeout)` once `timeout_us` has elapsed without
    /// a complete echo; it never blocks longer than that bound (plus the
    /// trigger pulse itself).
    fn measure_echo_pulse(&mut self, timeout_us: u32) -> Result<u32, PulseTimeout>;
}
