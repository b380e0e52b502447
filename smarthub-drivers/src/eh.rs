//! `embedded-hal` 1.0 adapters
//!
//! Wrap any `embedded-hal` digital pin or PWM channel so it can be used
//! where the smarthub-hal ports are expected. GPIO on the supported chips
//! is infallible, so bus errors are dropped here.

use core::cell::RefCell;

use embedded_hal::digital;
use embedded_hal::pwm::SetDutyCycle;
use smarthub_hal::{InputPin, OutputPin, PwmOutput};

/// Output pin adapter
pub struct EhOutput<P> {
    pin: P,
    high: bool,
}

impl<P: digital::OutputPin> EhOutput<P> {
    /// Wrap a pin, driving it low
    pub fn new(mut pin: P) -> Self {
        pin.set_low().ok();
        Self { pin, high: false }
    }
}

impl<P: digital::OutputPin> OutputPin for EhOutput<P> {
    fn set_high(&mut self) {
        self.pin.set_high().ok();
        self.high = true;
    }

    fn set_low(&mut self) {
        self.pin.set_low().ok();
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Input pin adapter
///
/// `embedded-hal` 1.0 reads take `&mut self`; the port trait reads through
/// `&self`, so the pin sits in a `RefCell`.
pub struct EhInput<P> {
    pin: RefCell<P>,
}

impl<P: digital::InputPin> EhInput<P> {
    pub fn new(pin: P) -> Self {
        Self {
            pin: RefCell::new(pin),
        }
    }
}

impl<P: digital::InputPin> InputPin for EhInput<P> {
    fn is_high(&self) -> bool {
        self.pin.borrow_mut().is_high().unwrap_or(false)
    }
}

/// PWM channel adapter
///
/// Maps the 8-bit duty onto the channel's native resolution.
pub struct EhPwm<P> {
    channel: P,
    duty: u8,
}

impl<P: SetDutyCycle> EhPwm<P> {
    /// Wrap a channel, starting fully off
    pub fn new(mut channel: P) -> Self {
        channel.set_duty_cycle_fully_off().ok();
        Self { channel, duty: 0 }
    }
}

impl<P: SetDutyCycle> PwmOutput for EhPwm<P> {
    fn set_duty(&mut self, duty: u8) {
        self.channel.set_duty_cycle_fraction(duty as u16, 255).ok();
        self.duty = duty;
    }

    fn duty(&self) -> u8 {
        self.duty
    }
}
