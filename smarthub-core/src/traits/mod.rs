//! Collaborator traits
//!
//! These traits define the interface between the monitoring logic and the
//! concrete sensor, display and feedback implementations.

pub mod display;
pub mod environment;
pub mod feedback;

pub use display::{StatusRenderer, StatusView};
pub use environment::{EnvironmentalSensor, SensorError};
pub use feedback::AlarmIndicator;
