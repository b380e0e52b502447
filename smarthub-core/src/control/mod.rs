//! Control loop
//!
//! Ties inputs, sampling, alarm feedback and rendering together on a
//! periodic tick. Everything runs in one cooperative loop; the only state
//! outside the [`ControlLoop`] instance is the interrupt
//! [`EdgeCounter`](crate::input::EdgeCounter).

pub mod gate;
pub mod hub;

pub use gate::IntervalGate;
pub use hub::{ControlLoop, StartupError, TickReport};
