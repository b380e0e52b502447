//! Alarm evaluation
//!
//! Pure mapping from the latest snapshot and threshold to an alarm flag and
//! a feedback color.

pub mod evaluator;
pub mod threshold;

pub use evaluator::{AlarmEvaluator, AlarmState, ColorCode};
