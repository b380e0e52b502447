//! HC-SR04 ultrasonic ranger
//!
//! A 10µs trigger pulse starts a measurement; the module answers with an
//! echo pulse as wide as the sound round-trip time.

use embedded_hal::delay::DelayNs;
use smarthub_hal::{InputPin, MicrosClock, OutputPin, PulseTimeout, PulseTimer};

/// Trigger pulse width (µs)
const TRIGGER_US: u32 = 10;

/// Settle time with the trigger held low before pulsing (µs)
const SETTLE_US: u32 = 2;

/// HC-SR04 on a trigger output and an echo input
pub struct HcSr04<T, E, D, C> {
    trigger: T,
    echo: E,
    delay: D,
    clock: C,
}

impl<T, E, D, C> HcSr04<T, E, D, C>
where
    T: OutputPin,
    E: InputPin,
    D: DelayNs,
    C: MicrosClock,
{
    pub fn new(mut trigger: T, echo: E, delay: D, clock: C) -> Self {
        trigger.set_low();
        Self {
            trigger,
            echo,
            delay,
            clock,
        }
    }

    fn fire(&mut self) {
        self.trigger.set_low();
        self.delay.delay_us(SETTLE_US);
        self.trigger.set_high();
        self.delay.delay_us(TRIGGER_US);
        self.trigger.set_low();
    }
}

impl<T, E, D, C> PulseTimer for HcSr04<T, E, D, C>
where
    T: OutputPin,
    E: InputPin,
    D: DelayNs,
    C: MicrosClock,
{
    fn measure_echo_pulse(&mut self, timeout_us: u32) -> Result<u32, PulseTimeout> {
        self.fire();

        // One deadline covers both the wait for the rising edge and the
        // pulse itself.
        let start = self.clock.now_us();
        let expired = |clock: &C| clock.elapsed_us(start) > timeout_us as u64;

        while self.echo.is_low() {
            if expired(&self.clock) {
                return Err(PulseTimeout);
            }
        }

        let rise = self.clock.now_us();
        while self.echo.is_high() {
            if expired(&self.clock) {
                return Err(PulseTimeout);
            }
        }

        Ok(self.clock.elapsed_us(rise) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    /// Shared simulated time; every echo sample costs 1µs
    struct Bench {
        now: Cell<u64>,
        fired_at: Cell<Option<u64>>,
    }

    impl Bench {
        fn new() -> Self {
            Self {
                now: Cell::new(0),
                fired_at: Cell::new(None),
            }
        }
    }

    struct Trigger<'a> {
        bench: &'a Bench,
        high: bool,
    }

    impl OutputPin for Trigger<'_> {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            if self.high {
                self.bench.fired_at.set(Some(self.bench.now.get()));
            }
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    /// Echo goes high `lag_us` after the trigger and stays high `width_us`
    struct Echo<'a> {
        bench: &'a Bench,
        lag_us: u64,
        width_us: Option<u64>,
    }

    impl InputPin for Echo<'_> {
        fn is_high(&self) -> bool {
            let now = self.bench.now.get();
            self.bench.now.set(now + 1);

            let (Some(fired), Some(width)) = (self.bench.fired_at.get(), self.width_us) else {
                return false;
            };
            let rise = fired + self.lag_us;
            now >= rise && now < rise + width
        }
    }

    struct Delay<'a>(&'a Bench);

    impl DelayNs for Delay<'_> {
        fn delay_ns(&mut self, ns: u32) {
            let now = self.0.now.get();
            self.0.now.set(now + (ns as u64).div_ceil(1000));
        }
    }

    struct Clock<'a>(&'a Bench);

    impl MicrosClock for Clock<'_> {
        fn now_us(&self) -> u64 {
            self.0.now.get()
        }
    }

    fn ranger(bench: &Bench, width_us: Option<u64>) -> HcSr04<Trigger<'_>, Echo<'_>, Delay<'_>, Clock<'_>> {
        HcSr04::new(
            Trigger {
                bench,
                high: false,
            },
            Echo {
                bench,
                lag_us: 200,
                width_us,
            },
            Delay(bench),
            Clock(bench),
        )
    }

    #[test]
    fn test_measures_echo_width() {
        let bench = Bench::new();
        let mut hc = ranger(&bench, Some(1000));

        let width = hc.measure_echo_pulse(30_000).unwrap();
        assert!((999..=1001).contains(&width), "width {}", width);
    }

    #[test]
    fn test_no_echo_times_out() {
        let bench = Bench::new();
        let mut hc = ranger(&bench, None);

        assert_eq!(hc.measure_echo_pulse(30_000), Err(PulseTimeout));
        // Gave up shortly after the deadline
        assert!(bench.now.get() < 30_100);
    }

    #[test]
    fn test_pulse_longer_than_deadline_times_out() {
        let bench = Bench::new();
        let mut hc = ranger(&bench, Some(50_000));

        assert_eq!(hc.measure_echo_pulse(30_000), Err(PulseTimeout));
    }
}
