//! DHT11 temperature/humidity sensor
//!
//! Single-wire protocol on an open-drain line with a pull-up:
//!
//! ```text
//! host:   ‾‾‾\______18ms______/‾‾
//! sensor:                        \__80µs__/‾‾80µs‾‾\  40 × bit  \_
//! bit:    \__50µs__/‾‾ 26µs (0) or 70µs (1) ‾‾\
//! ```
//!
//! Frame: humidity int, humidity tenths, temperature int, temperature
//! tenths (bit 7 = negative), checksum. Every edge wait is bounded so a
//! missing sensor costs at most a few hundred microseconds after the start
//! signal.

use embedded_hal::delay::DelayNs;
use smarthub_core::traits::{EnvironmentalSensor, SensorError};
use smarthub_hal::{IoPin, Level, MicrosClock};

/// Host start signal (ms)
const START_LOW_MS: u32 = 18;

/// Bound on each response phase edge (µs)
const RESPONSE_TIMEOUT_US: u32 = 100;

/// Bound on each bit phase edge (µs)
const BIT_TIMEOUT_US: u32 = 100;

/// High phases longer than this are a `1` bit (µs)
const ONE_THRESHOLD_US: u32 = 40;

/// The sensor refreshes at most once per second
const MIN_INTERVAL_US: u64 = 1_000_000;

/// Decoded DHT11 frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dht11Reading {
    /// Relative humidity in % × 10
    pub humidity_x10: u16,
    /// Temperature in °C × 10
    pub temperature_x10: i16,
}

/// Validate and decode a raw 5-byte frame
pub fn decode_frame(frame: [u8; 5]) -> Result<Dht11Reading, SensorError> {
    let sum = frame[..4].iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
    if sum != frame[4] {
        return Err(SensorError::Checksum);
    }

    let humidity_x10 = frame[0] as u16 * 10 + frame[1].min(9) as u16;
    if humidity_x10 > 1000 {
        return Err(SensorError::OutOfRange);
    }

    let magnitude = frame[2] as i16 * 10 + (frame[3] & 0x7F).min(9) as i16;
    let temperature_x10 = if frame[3] & 0x80 != 0 {
        -magnitude
    } else {
        magnitude
    };

    Ok(Dht11Reading {
        humidity_x10,
        temperature_x10,
    })
}

/// DHT11 driver
///
/// Reads are cached for one second; the temperature and humidity calls of
/// one sample share a single bus transaction.
pub struct Dht11<P, D, C> {
    pin: P,
    delay: D,
    clock: C,
    /// Time and outcome of the last bus read
    cache: Option<(u64, Result<Dht11Reading, SensorError>)>,
}

impl<P, D, C> Dht11<P, D, C>
where
    P: IoPin,
    D: DelayNs,
    C: MicrosClock,
{
    pub fn new(mut pin: P, delay: D, clock: C) -> Self {
        // Idle state is released (pulled high)
        pin.set_high();
        Self {
            pin,
            delay,
            clock,
            cache: None,
        }
    }

    /// Get a reading, talking to the sensor only if the cache is stale
    pub fn read(&mut self) -> Result<Dht11Reading, SensorError> {
        let now = self.clock.now_us();
        if let Some((at, result)) = self.cache {
            if now.saturating_sub(at) < MIN_INTERVAL_US {
                return result;
            }
        }

        let result = self.read_frame().and_then(decode_frame);
        self.cache = Some((now, result));
        result
    }

    fn read_frame(&mut self) -> Result<[u8; 5], SensorError> {
        self.pin.set_low();
        self.delay.delay_ms(START_LOW_MS);
        self.pin.set_high();

        // Sensor response: pulls low, then high, then low for the first bit
        self.wait_while(Level::High, RESPONSE_TIMEOUT_US)?;
        self.wait_while(Level::Low, RESPONSE_TIMEOUT_US)?;
        self.wait_while(Level::High, RESPONSE_TIMEOUT_US)?;

        let mut frame = [0u8; 5];
        for bit in 0..40 {
            self.wait_while(Level::Low, BIT_TIMEOUT_US)?;
            let high_us = self.wait_while(Level::High, BIT_TIMEOUT_US)?;

            let byte = &mut frame[bit / 8];
            *byte <<= 1;
            if high_us > ONE_THRESHOLD_US {
                *byte |= 1;
            }
        }

        Ok(frame)
    }

    /// Busy-wait while the line reads `level`; returns the time spent
    fn wait_while(&mut self, level: Level, timeout_us: u32) -> Result<u32, SensorError> {
        let start = self.clock.now_us();
        while self.pin.level() == level {
            if self.clock.elapsed_us(start) > timeout_us as u64 {
                return Err(SensorError::Timeout);
            }
            core::hint::spin_loop();
        }
        Ok(self.clock.elapsed_us(start) as u32)
    }
}

impl<P, D, C> EnvironmentalSensor for Dht11<P, D, C>
where
    P: IoPin,
    D: DelayNs,
    C: MicrosClock,
{
    fn read_temperature_x10(&mut self) -> Result<i16, SensorError> {
        self.read().map(|r| r.temperature_x10)
    }

    fn read_humidity_x10(&mut self) -> Result<u16, SensorError> {
        self.read().map(|r| r.humidity_x10)
    }
}
