//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the collaborator traits
//! defined in smarthub-core, written against the smarthub-hal ports:
//!
//! - Environmental sensor (DHT11 single-wire)
//! - Ultrasonic ranger (HC-SR04 echo timing)
//! - Alarm feedback (buzzer, RGB LED)
//! - Adapters from `embedded-hal` 1.0 pins and PWM channels to the ports

#![no_std]
#![deny(unsafe_code)]

pub mod eh;
pub mod feedback;
pub mod sensor;
