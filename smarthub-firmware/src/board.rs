//! RP2040 glue for the SmartHub ports
//!
//! Plain push-pull pins and PWM slices go through the `embedded-hal`
//! adapters in `smarthub_drivers::eh`. What is left here needs chip
//! knowledge: the shared ADC, the DHT11 open-drain line and the time base.

use core::cell::RefCell;

use defmt::*;
use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_rp::gpio::{Flex, Pull};
use embassy_time::Instant;

use smarthub_hal::{AnalogInput, Clock, InputPin, MicrosClock, OutputPin};

/// The single RP2040 ADC, shared by every analog channel
pub type SharedAdc = RefCell<Adc<'static, Blocking>>;

/// One ADC channel
///
/// Conversions are blocking and take about 2 µs.
pub struct AdcInput<'a> {
    adc: &'a SharedAdc,
    channel: Channel<'static>,
}

impl<'a> AdcInput<'a> {
    pub fn new(adc: &'a SharedAdc, channel: Channel<'static>) -> Self {
        Self { adc, channel }
    }
}

impl AnalogInput for AdcInput<'_> {
    fn read(&mut self) -> u16 {
        let Ok(mut adc) = self.adc.try_borrow_mut() else {
            warn!("ADC busy");
            return 0;
        };

        match adc.blocking_read(&mut self.channel) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("ADC read failed: {:?}", e);
                0
            }
        }
    }
}

/// Open-drain data line for single-wire sensors
///
/// Low is driven actively; high releases the line to the pull-up.
pub struct OpenDrainLine {
    pin: Flex<'static>,
    released: bool,
}

impl OpenDrainLine {
    pub fn new(mut pin: Flex<'static>) -> Self {
        pin.set_pull(Pull::Up);
        pin.set_as_input();
        Self {
            pin,
            released: true,
        }
    }
}

impl OutputPin for OpenDrainLine {
    fn set_high(&mut self) {
        self.pin.set_as_input();
        self.released = true;
    }

    fn set_low(&mut self) {
        self.pin.set_low();
        self.pin.set_as_output();
        self.released = false;
    }

    fn is_set_high(&self) -> bool {
        self.released
    }
}

impl InputPin for OpenDrainLine {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

/// Embassy time driver as both millisecond and microsecond clock
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }
}

impl MicrosClock for EmbassyClock {
    fn now_us(&self) -> u64 {
        Instant::now().as_micros()
    }
}
