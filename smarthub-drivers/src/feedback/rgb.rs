//! RGB status LED on three PWM channels

use smarthub_core::alarm::ColorCode;
use smarthub_hal::PwmOutput;

/// RGB LED
///
/// Common-cathode LEDs light with a high duty; common-anode LEDs light with
/// a low duty and are driven with the inverted value.
pub struct RgbLed<R, G, B> {
    red: R,
    green: G,
    blue: B,
    common_anode: bool,
    color: ColorCode,
}

impl<R: PwmOutput, G: PwmOutput, B: PwmOutput> RgbLed<R, G, B> {
    /// Create the LED, starting dark
    pub fn new(red: R, green: G, blue: B, common_anode: bool) -> Self {
        let mut led = Self {
            red,
            green,
            blue,
            common_anode,
            color: ColorCode::Off,
        };
        led.set_color(ColorCode::Off);
        led
    }

    pub fn set_color(&mut self, color: ColorCode) {
        let (r, g, b) = color.rgb();
        self.red.set_duty(self.drive(r));
        self.green.set_duty(self.drive(g));
        self.blue.set_duty(self.drive(b));
        self.color = color;
    }

    pub fn color(&self) -> ColorCode {
        self.color
    }

    fn drive(&self, duty: u8) -> u8 {
        if self.common_anode {
            u8::MAX - duty
        } else {
            duty
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockPwm(u8);

    impl PwmOutput for MockPwm {
        fn set_duty(&mut self, duty: u8) {
            self.0 = duty;
        }

        fn duty(&self) -> u8 {
            self.0
        }
    }

    fn duties<R: PwmOutput, G: PwmOutput, B: PwmOutput>(led: &RgbLed<R, G, B>) -> (u8, u8, u8) {
        (led.red.duty(), led.green.duty(), led.blue.duty())
    }

    #[test]
    fn test_common_cathode() {
        let mut led = RgbLed::new(MockPwm(9), MockPwm(9), MockPwm(9), false);
        assert_eq!(duties(&led), (0, 0, 0));

        led.set_color(ColorCode::Amber);
        assert_eq!(duties(&led), (255, 165, 0));
        assert_eq!(led.color(), ColorCode::Amber);
    }

    #[test]
    fn test_common_anode_inverts() {
        let mut led = RgbLed::new(MockPwm(0), MockPwm(0), MockPwm(0), true);
        assert_eq!(duties(&led), (255, 255, 255));

        led.set_color(ColorCode::Blue);
        assert_eq!(duties(&led), (255, 255, 0));
    }
}
