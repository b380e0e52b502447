//! Generic debounce state machine
//!
//! Works on any level type: digital [`Level`](smarthub_hal::Level)s for
//! buttons, [`AxisZone`](super::AxisZone)s for analog axes.

use crate::config::InputConfig;

/// Debounce timing parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceTiming {
    /// Time a new level must persist before it is accepted (ms)
    pub window_ms: u32,
    /// Quiet period after an emitted event (ms)
    pub cooldown_ms: u32,
    /// Re-emit while the active level is held
    ///
    /// After each cooldown the held level has to re-qualify through a fresh
    /// window before it emits again.
    pub repeat: bool,
}

impl DebounceTiming {
    /// Timing for push buttons: one press, one event
    pub fn button(config: &InputConfig) -> Self {
        Self {
            window_ms: config.debounce_ms,
            cooldown_ms: config.button_cooldown_ms,
            repeat: false,
        }
    }

    /// Timing for analog axes: repeats while held off-center
    pub fn axis(config: &InputConfig) -> Self {
        Self {
            window_ms: config.debounce_ms,
            cooldown_ms: config.axis_cooldown_ms,
            repeat: true,
        }
    }
}

impl Default for DebounceTiming {
    fn default() -> Self {
        Self::button(&InputConfig::default())
    }
}

/// State machine phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebouncePhase {
    /// Raw level matches the stable level
    Idle,
    /// Raw level differs; waiting for it to hold for the window
    Candidate,
    /// An event was emitted; ignoring the input until `since_ms + cooldown`
    Cooldown { since_ms: u64 },
}

/// Per-input debounce bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceState<L> {
    /// Level seen on the most recent poll
    pub last_raw: L,
    /// When `last_raw` last changed, or when the current candidate started
    pub last_transition_ms: u64,
    /// Last accepted level
    pub stable: L,
}

/// Debouncer for a single input
#[derive(Debug, Clone)]
pub struct Debouncer<L> {
    timing: DebounceTiming,
    rest: L,
    state: DebounceState<L>,
    phase: DebouncePhase,
}

impl<L: Copy + PartialEq> Debouncer<L> {
    /// Create a debouncer whose stable level starts at `rest`
    ///
    /// `rest` is the level that never produces an event (released button,
    /// centered axis).
    pub fn new(rest: L, timing: DebounceTiming) -> Self {
        Self {
            timing,
            rest,
            state: DebounceState {
                last_raw: rest,
                last_transition_ms: 0,
                stable: rest,
            },
            phase: DebouncePhase::Idle,
        }
    }

    /// Feed one raw sample
    ///
    /// Returns the newly confirmed level when it is an active (non-rest)
    /// level. Confirmations back to the rest level are silent.
    pub fn poll(&mut self, raw: L, now_ms: u64) -> Option<L> {
        let changed = raw != self.state.last_raw;
        if changed {
            self.state.last_raw = raw;
            self.state.last_transition_ms = now_ms;
        }

        if let DebouncePhase::Cooldown { since_ms } = self.phase {
            if now_ms.saturating_sub(since_ms) < self.timing.cooldown_ms as u64 {
                return None;
            }
            if self.timing.repeat {
                self.state.stable = self.rest;
            }
            self.phase = DebouncePhase::Idle;
        }

        match self.phase {
            DebouncePhase::Idle => {
                if raw != self.state.stable {
                    self.phase = DebouncePhase::Candidate;
                    self.state.last_transition_ms = now_ms;
                }
                None
            }
            DebouncePhase::Candidate => {
                if changed {
                    self.phase = DebouncePhase::Idle;
                    return None;
                }
                let held = now_ms.saturating_sub(self.state.last_transition_ms);
                if held < self.timing.window_ms as u64 {
                    return None;
                }

                self.state.stable = raw;
                if raw == self.rest {
                    self.phase = DebouncePhase::Idle;
                    None
                } else {
                    self.phase = DebouncePhase::Cooldown { since_ms: now_ms };
                    Some(raw)
                }
            }
            // Left above
            DebouncePhase::Cooldown { .. } => None,
        }
    }

    /// Last accepted level
    pub fn stable(&self) -> L {
        self.state.stable
    }

    pub fn phase(&self) -> DebouncePhase {
        self.phase
    }

    pub fn state(&self) -> &DebounceState<L> {
        &self.state
    }

    pub fn timing(&self) -> &DebounceTiming {
        &self.timing
    }
}
