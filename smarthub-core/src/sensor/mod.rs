//! Sensor sampling
//!
//! Normalizes every physical quantity into a [`SensorSnapshot`]. Failures
//! are tagged per field and never propagate as errors.

pub mod reader;
pub mod snapshot;

pub use reader::{SensorReader, SnapshotSource};
pub use snapshot::{Distance, Reading, SensorSnapshot};
