//! Value formatting for the status pages

use core::fmt::Write;

use heapless::String;
use smarthub_core::sensor::{Distance, Reading};

/// Shown in place of a missing temperature or humidity
pub const MISSING: &str = "--.-";

/// Text buffer for one formatted value
pub type ValueText = String<12>;

/// Format a fixed-point tenths value: `234` → `"23.4"`, `-5` → `"-0.5"`
pub fn tenths(value: i32) -> ValueText {
    let mut out = ValueText::new();
    let sign = if value < 0 { "-" } else { "" };
    let abs = value.unsigned_abs();
    // Any i32 fits in 12 chars
    let _ = write!(out, "{}{}.{}", sign, abs / 10, abs % 10);
    out
}

/// Format a reading in tenths, or the missing placeholder
pub fn reading_x10<T: Copy + Into<i32>>(reading: Reading<T>) -> ValueText {
    match reading.value() {
        Some(v) => tenths(v.into()),
        None => {
            let mut out = ValueText::new();
            let _ = out.push_str(MISSING);
            out
        }
    }
}

/// Format a distance as `"17 cm"`, or `"--"` without an echo
pub fn distance(distance: Distance) -> ValueText {
    let mut out = ValueText::new();
    match distance.cm() {
        Some(cm) => {
            let _ = write!(out, "{} cm", cm);
        }
        None => {
            let _ = out.push_str("--");
        }
    }
    out
}

/// Format an unsigned integer
pub fn number(value: u32) -> ValueText {
    let mut out = ValueText::new();
    let _ = write!(out, "{}", value);
    out
}
