//! Interrupt-counted button
//!
//! The interrupt side only calls [`EdgeCounter::record`] and
//! [`EdgeCounter::publish_level`]. The control loop drains the counter to
//! learn that the line moved, then confirms the pressed level through the
//! usual [`Debouncer`] before emitting.

use portable_atomic::{AtomicBool, AtomicU32, Ordering};
use smarthub_hal::{InputPin, Level};

use super::debounce::{DebouncePhase, DebounceTiming, Debouncer};
use super::events::NavigationEvent;

/// Edge counter and line level shared between an interrupt handler and the
/// control loop
///
/// Usually placed in a `static`. Reads as an [`InputPin`] reporting the last
/// published level.
pub struct EdgeCounter {
    edges: AtomicU32,
    high: AtomicBool,
}

impl EdgeCounter {
    /// Counter for a line that idles high (pull-up, button to ground)
    pub const fn new() -> Self {
        Self::with_idle_level(Level::High)
    }

    pub const fn with_idle_level(idle: Level) -> Self {
        Self {
            edges: AtomicU32::new(0),
            high: AtomicBool::new(matches!(idle, Level::High)),
        }
    }

    /// Record one edge (interrupt context)
    pub fn record(&self) {
        self.edges.fetch_add(1, Ordering::Relaxed);
    }

    /// Store the line level sampled by the interrupt side
    pub fn publish_level(&self, level: Level) {
        self.high.store(level.is_high(), Ordering::Relaxed);
    }

    /// Take all edges recorded since the last drain
    pub fn drain(&self) -> u32 {
        self.edges.swap(0, Ordering::Relaxed)
    }

    /// Edges waiting to be drained
    pub fn pending(&self) -> u32 {
        self.edges.load(Ordering::Relaxed)
    }
}

impl Default for EdgeCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl InputPin for EdgeCounter {
    fn is_high(&self) -> bool {
        self.high.load(Ordering::Relaxed)
    }
}

/// Button whose edges are captured by an interrupt
///
/// Sleeps until an edge is drained. While awake the line level is fed to a
/// [`Debouncer`], so a press only counts once it held for the debounce
/// window, and release bounce after a long hold never counts.
pub struct InterruptButton<'a, P> {
    counter: &'a EdgeCounter,
    line: P,
    active: Level,
    event: NavigationEvent,
    debouncer: Debouncer<Level>,
    awake: bool,
}

impl<'a, P: InputPin> InterruptButton<'a, P> {
    /// Create a button that reads `active` on `line` while pressed
    pub fn new(
        counter: &'a EdgeCounter,
        line: P,
        active: Level,
        event: NavigationEvent,
        timing: DebounceTiming,
    ) -> Self {
        Self {
            counter,
            line,
            active,
            event,
            debouncer: Debouncer::new(!active, timing),
            awake: false,
        }
    }

    /// Drain the counter and emit at most one event
    pub fn poll_event(&mut self, now_ms: u64) -> NavigationEvent {
        let edges = self.counter.drain();
        if edges > 0 && !self.awake {
            debug!("Button woken by {} edges", edges);
            self.awake = true;
        }
        if !self.awake {
            return NavigationEvent::None;
        }

        let raw = self.line.level();
        let confirmed = self.debouncer.poll(raw, now_ms);

        // Only sleep released: a clean release may not produce a recorded edge
        let rest = !self.active;
        if self.debouncer.phase() == DebouncePhase::Idle
            && self.debouncer.stable() == rest
            && raw == rest
        {
            self.awake = false;
        }

        match confirmed {
            Some(level) if level == self.active => self.event,
            _ => NavigationEvent::None,
        }
    }

    /// Check if the button is currently held (debounced)
    pub fn is_pressed(&self) -> bool {
        self.debouncer.stable() == self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMING: DebounceTiming = DebounceTiming {
        window_ms: 100,
        cooldown_ms: 300,
        repeat: false,
    };

    fn button(counter: &EdgeCounter) -> InterruptButton<'_, &EdgeCounter> {
        InterruptButton::new(counter, counter, Level::Low, NavigationEvent::Next, TIMING)
    }

    /// Poll every 20ms over `[from, to)` and count emitted events
    fn run(button: &mut InterruptButton<'_, &EdgeCounter>, from: u64, to: u64) -> u32 {
        (from..to)
            .step_by(20)
            .filter(|&t| button.poll_event(t) == NavigationEvent::Next)
            .count() as u32
    }

    #[test]
    fn test_counter_drain() {
        let counter = EdgeCounter::new();
        counter.record();
        counter.record();
        assert_eq!(counter.pending(), 2);
        assert_eq!(counter.drain(), 2);
        assert_eq!(counter.drain(), 0);
    }

    #[test]
    fn test_static_counter() {
        static COUNTER: EdgeCounter = EdgeCounter::new();
        COUNTER.record();
        assert_eq!(COUNTER.drain(), 1);
        assert!(COUNTER.is_high());
    }

    #[test]
    fn test_published_level() {
        let counter = EdgeCounter::with_idle_level(Level::Low);
        assert_eq!(counter.level(), Level::Low);
        counter.publish_level(Level::High);
        assert_eq!(counter.level(), Level::High);
    }

    #[test]
    fn test_press_confirmed_after_window() {
        let counter = EdgeCounter::new();
        let mut button = button(&counter);

        for _ in 0..7 {
            counter.record();
        }
        counter.publish_level(Level::Low);

        assert_eq!(button.poll_event(0), NavigationEvent::None);
        assert_eq!(button.poll_event(60), NavigationEvent::None);
        assert_eq!(button.poll_event(100), NavigationEvent::Next);
        assert!(button.is_pressed());
        assert_eq!(counter.pending(), 0);
    }

    #[test]
    fn test_single_glitch_edge_is_ignored() {
        let counter = EdgeCounter::new();
        let mut button = button(&counter);

        // Edge recorded, but the line is back at rest when sampled
        counter.record();
        assert_eq!(run(&mut button, 0, 500), 0);
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_short_spike_is_ignored() {
        let counter = EdgeCounter::new();
        let mut button = button(&counter);

        counter.record();
        counter.publish_level(Level::Low);
        assert_eq!(button.poll_event(0), NavigationEvent::None);
        counter.publish_level(Level::High);
        assert_eq!(run(&mut button, 20, 500), 0);
    }

    #[test]
    fn test_release_bounce_after_long_hold() {
        let counter = EdgeCounter::new();
        let mut button = button(&counter);

        for _ in 0..3 {
            counter.record();
        }
        counter.publish_level(Level::Low);
        assert_eq!(run(&mut button, 0, 400), 1);

        // Held past the cooldown, then released with bounce
        counter.record();
        counter.record();
        counter.publish_level(Level::High);
        assert_eq!(run(&mut button, 400, 1000), 0);
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_next_press_after_clean_release() {
        let counter = EdgeCounter::new();
        let mut button = button(&counter);

        counter.record();
        counter.publish_level(Level::Low);
        assert_eq!(run(&mut button, 0, 400), 1);

        // Release produces no recorded edge
        counter.publish_level(Level::High);
        assert_eq!(run(&mut button, 400, 600), 0);

        counter.record();
        counter.publish_level(Level::Low);
        assert_eq!(run(&mut button, 600, 800), 1);
    }

    #[test]
    fn test_no_edges_no_event() {
        let counter = EdgeCounter::new();
        let mut button = button(&counter);

        // Level changes without an edge do not wake the button
        counter.publish_level(Level::Low);
        assert_eq!(run(&mut button, 0, 500), 0);
    }
}
