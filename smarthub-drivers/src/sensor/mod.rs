//! Sensor implementations

pub mod dht11;
pub mod ultrasonic;

pub use dht11::{decode_frame, Dht11, Dht11Reading};
pub use ultrasonic::HcSr04;
