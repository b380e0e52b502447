//! Alarm feedback outputs

pub mod buzzer;
pub mod rgb;

pub use buzzer::Buzzer;
pub use rgb::RgbLed;

use smarthub_core::alarm::AlarmState;
use smarthub_core::traits::AlarmIndicator;
use smarthub_hal::{OutputPin, PwmOutput};

/// Buzzer plus RGB LED
///
/// The buzzer sounds while the alarm is active; the LED shows the evaluated
/// color.
pub struct AlarmOutputs<P, R, G, B> {
    buzzer: Buzzer<P>,
    led: RgbLed<R, G, B>,
}

impl<P, R, G, B> AlarmOutputs<P, R, G, B>
where
    P: OutputPin,
    R: PwmOutput,
    G: PwmOutput,
    B: PwmOutput,
{
    pub fn new(buzzer: Buzzer<P>, led: RgbLed<R, G, B>) -> Self {
        Self { buzzer, led }
    }

    pub fn buzzer_mut(&mut self) -> &mut Buzzer<P> {
        &mut self.buzzer
    }

    pub fn led(&self) -> &RgbLed<R, G, B> {
        &self.led
    }
}

impl<P, R, G, B> AlarmIndicator for AlarmOutputs<P, R, G, B>
where
    P: OutputPin,
    R: PwmOutput,
    G: PwmOutput,
    B: PwmOutput,
{
    fn indicate(&mut self, state: &AlarmState) {
        self.buzzer.set_on(state.active);
        self.led.set_color(state.color);
    }
}
