//! SmartHub Hardware Abstraction Layer
//!
//! This crate defines the narrow hardware ports the SmartHub logic is
//! written against. Board crates implement them for a concrete chip; the
//! core and driver crates only ever see these traits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  smarthub-core / smarthub-drivers       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  smarthub-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  board glue (smarthub-firmware)         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`adc::AnalogInput`] - 12-bit analog channels
//! - [`pwm::PwmOutput`] - 8-bit duty outputs (RGB channels)
//! - [`pulse::PulseTimer`] - Echo pulse measurement with a hard timeout
//! - [`clock::Clock`], [`clock::MicrosClock`] - Monotonic time sources

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod clock;
pub mod gpio;
pub mod pulse;
pub mod pwm;

// Re-export key traits at crate root for convenience
pub use adc::{AnalogInput, ADC_MAX};
pub use clock::{Clock, MicrosClock};
pub use gpio::{InputPin, IoPin, Level, OutputPin};
pub use pulse::{PulseTimeout, PulseTimer};
pub use pwm::PwmOutput;
