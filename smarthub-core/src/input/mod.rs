//! Navigation input
//!
//! Turns noisy raw controls (buttons, potentiometer and joystick axes,
//! interrupt-counted buttons) into clean [`NavigationEvent`]s.
//!
//! Every source is polled on every control-loop tick. The shared
//! [`Debouncer`] state machine runs:
//!
//! ```text
//! Idle ──raw ≠ stable──▶ Candidate ──held ≥ window──▶ Confirmed ──▶ Cooldown ──▶ Idle
//!                            │                                        
//!                            └──level moved──▶ Idle
//! ```

pub mod axis;
pub mod button;
pub mod debounce;
pub mod edge;
pub mod events;
pub mod source;

pub use axis::{AxisDeadband, AxisInput, AxisZone, Joystick};
pub use button::DebouncedButton;
pub use debounce::{DebouncePhase, DebounceState, DebounceTiming, Debouncer};
pub use edge::{EdgeCounter, InterruptButton};
pub use events::{Events, NavigationEvent, MAX_EVENTS_PER_TICK};
pub use source::NavigationSource;
