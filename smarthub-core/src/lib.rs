//! Board-agnostic core logic for the SmartHub monitoring terminal
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Sensor snapshot types and the sampling front-end
//! - Debounced navigation inputs (buttons, analog axes, interrupt edges)
//! - Alarm evaluation and threshold derivation
//! - Menu page navigation
//! - The cooperative control loop tying them together
//! - Configuration type definitions
//! - Collaborator traits (environmental sensor, renderer, alarm indicator)

#![no_std]
#![deny(unsafe_code)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod alarm;
pub mod config;
pub mod control;
pub mod input;
pub mod menu;
pub mod sensor;
pub mod traits;
