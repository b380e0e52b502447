//! Sensor reader
//!
//! Owns the sensor ports and produces one [`SensorSnapshot`] per call.
//! Rate limiting is the control loop's job.

use smarthub_hal::{AnalogInput, PulseTimer};

use super::snapshot::{Distance, Reading, SensorSnapshot};
use crate::traits::EnvironmentalSensor;

/// Something that can produce a snapshot on demand
pub trait SnapshotSource {
    /// Read every sensor once
    fn sample(&mut self, now_ms: u64) -> SensorSnapshot;
}

/// Reads the environmental sensor, light and aux ADC channels, and the
/// ultrasonic ranger
pub struct SensorReader<E, L, P, X> {
    env: E,
    light: L,
    ranger: P,
    aux: X,
    pulse_timeout_us: u32,
}

impl<E, L, P, X> SensorReader<E, L, P, X>
where
    E: EnvironmentalSensor,
    L: AnalogInput,
    P: PulseTimer,
    X: AnalogInput,
{
    pub fn new(env: E, light: L, ranger: P, aux: X, pulse_timeout_us: u32) -> Self {
        Self {
            env,
            light,
            ranger,
            aux,
            pulse_timeout_us,
        }
    }

    fn read_distance(&mut self) -> Distance {
        match self.ranger.measure_echo_pulse(self.pulse_timeout_us) {
            Ok(us) => Distance::from_echo_us(us),
            Err(_) => Distance::Invalid,
        }
    }
}

impl<E, L, P, X> SnapshotSource for SensorReader<E, L, P, X>
where
    E: EnvironmentalSensor,
    L: AnalogInput,
    P: PulseTimer,
    X: AnalogInput,
{
    fn sample(&mut self, now_ms: u64) -> SensorSnapshot {
        let temperature = self.env.read_temperature_x10();
        if let Err(e) = temperature {
            warn!("Temperature unavailable: {:?}", e);
        }

        let humidity = self.env.read_humidity_x10();
        if let Err(e) = humidity {
            warn!("Humidity unavailable: {:?}", e);
        }

        let distance = self.read_distance();
        if distance == Distance::Invalid {
            debug!("No echo within {} us", self.pulse_timeout_us);
        }

        SensorSnapshot {
            temperature_x10: Reading::from(temperature),
            humidity_x10: Reading::from(humidity),
            light: self.light.read(),
            distance,
            aux_axis: self.aux.read(),
            taken_at_ms: now_ms,
        }
    }
}
