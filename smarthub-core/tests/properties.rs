//! Property tests for the board-agnostic logic

use proptest::prelude::*;

use smarthub_core::alarm::{AlarmEvaluator, ColorCode};
use smarthub_core::config::{AlarmConfig, AlarmTrigger, ThresholdSource};
use smarthub_core::control::IntervalGate;
use smarthub_core::input::{
    DebounceTiming, Debouncer, EdgeCounter, InterruptButton, NavigationEvent,
};
use smarthub_core::menu::{MenuController, PAGE_COUNT};
use smarthub_core::sensor::{Distance, Reading, SensorSnapshot};
use smarthub_hal::Level;

const WINDOW_MS: u32 = 100;
const COOLDOWN_MS: u32 = 300;

const TIMING: DebounceTiming = DebounceTiming {
    window_ms: WINDOW_MS,
    cooldown_ms: COOLDOWN_MS,
    repeat: false,
};

/// Raw samples as (level, ms since previous poll)
fn raw_sequence() -> impl Strategy<Value = Vec<(bool, u64)>> {
    prop::collection::vec((any::<bool>(), 1u64..80), 1..400)
}

fn run_debouncer(repeat: bool, samples: &[(bool, u64)]) -> (Vec<(u64, bool)>, Vec<usize>) {
    let mut debouncer = Debouncer::new(
        false,
        DebounceTiming {
            window_ms: WINDOW_MS,
            cooldown_ms: COOLDOWN_MS,
            repeat,
        },
    );

    let mut polls = Vec::new();
    let mut emitted = Vec::new();
    let mut now = 0u64;
    for (i, &(raw, dt)) in samples.iter().enumerate() {
        now += dt;
        polls.push((now, raw));
        if debouncer.poll(raw, now).is_some() {
            emitted.push(i);
        }
    }
    (polls, emitted)
}

fn snapshot_strategy() -> impl Strategy<Value = SensorSnapshot> {
    let temperature = prop_oneof![
        Just(Reading::Missing),
        (-400i16..800).prop_map(Reading::Valid)
    ];
    let distance = prop_oneof![
        Just(Distance::Invalid),
        (0u16..500).prop_map(Distance::Cm)
    ];
    (temperature, distance, 0u16..=4095, 0u16..=4095).prop_map(
        |(temperature_x10, distance, light, aux_axis)| SensorSnapshot {
            temperature_x10,
            humidity_x10: Reading::Valid(500),
            light,
            distance,
            aux_axis,
            taken_at_ms: 0,
        },
    )
}

fn trigger_strategy() -> impl Strategy<Value = AlarmTrigger> {
    prop_oneof![Just(AlarmTrigger::DistanceBelow), Just(AlarmTrigger::LightAbove)]
}

proptest! {
    #[test]
    fn debounce_emits_only_after_stable_window(samples in raw_sequence(), repeat in any::<bool>()) {
        let (polls, emitted) = run_debouncer(repeat, &samples);

        for &i in &emitted {
            let (t, level) = polls[i];
            prop_assert!(level, "only the active level emits");

            // Start of the run of identical samples ending at i
            let mut k = i;
            while k > 0 && polls[k - 1].1 == level {
                k -= 1;
            }
            prop_assert!(t - polls[k].0 >= WINDOW_MS as u64);
        }
    }

    #[test]
    fn debounce_respects_cooldown(samples in raw_sequence(), repeat in any::<bool>()) {
        let (polls, emitted) = run_debouncer(repeat, &samples);

        for pair in emitted.windows(2) {
            let gap = polls[pair[1]].0 - polls[pair[0]].0;
            prop_assert!(gap >= COOLDOWN_MS as u64);
        }
    }

    #[test]
    fn button_needs_release_between_events(samples in raw_sequence()) {
        let (polls, emitted) = run_debouncer(false, &samples);

        for pair in emitted.windows(2) {
            let released = polls[pair[0]..pair[1]].iter().any(|&(_, raw)| !raw);
            prop_assert!(released);
        }
    }

    #[test]
    fn evaluate_is_deterministic(
        snapshot in snapshot_strategy(),
        threshold in any::<u16>(),
        trigger in trigger_strategy(),
    ) {
        let config = AlarmConfig { trigger, ..AlarmConfig::default() };
        let evaluator = AlarmEvaluator::new(&config);

        let first = evaluator.evaluate(&snapshot, threshold);
        let second = evaluator.evaluate(&snapshot, threshold);
        prop_assert_eq!(first, second);
        prop_assert_eq!(first.active, first.color == ColorCode::Red);
    }

    #[test]
    fn invalid_distance_never_triggers(snapshot in snapshot_strategy(), threshold in any::<u16>()) {
        let evaluator = AlarmEvaluator::new(&AlarmConfig::default());
        let snapshot = SensorSnapshot { distance: Distance::Invalid, ..snapshot };
        prop_assert!(!evaluator.evaluate(&snapshot, threshold).active);
    }

    #[test]
    fn mapped_threshold_stays_in_range(min in 0u16..1000, span in 0u16..1000, aux in any::<u16>()) {
        let max = min + span;
        let threshold = ThresholdSource::Mapped { min, max }.derive(aux);
        prop_assert!(threshold >= min && threshold <= max);
    }

    #[test]
    fn full_cycle_returns_to_start(start in 0usize..PAGE_COUNT, forward in any::<bool>()) {
        let event = if forward { NavigationEvent::Next } else { NavigationEvent::Previous };
        let mut menu = MenuController::new();
        for _ in 0..start {
            menu.apply(NavigationEvent::Next);
        }
        let origin = menu.current_page();

        for _ in 0..PAGE_COUNT {
            prop_assert!(menu.apply(event));
        }
        prop_assert_eq!(menu.current_page(), origin);
    }

    #[test]
    fn sampling_at_most_once_per_interval(
        interval in 1u32..2000,
        deltas in prop::collection::vec(0u64..700, 1..300),
    ) {
        let mut gate = IntervalGate::new(interval);
        let mut now = 0u64;
        let mut last: Option<u64> = None;
        let mut opened = 0u64;

        for dt in deltas {
            now += dt;
            if gate.poll(now) {
                if let Some(prev) = last {
                    prop_assert!(now - prev >= interval as u64);
                }
                last = Some(now);
                opened += 1;
            }
        }
        prop_assert!(opened <= now / interval as u64 + 1);
    }

    #[test]
    fn held_press_with_edge_bursts_is_one_event(
        bursts in prop::collection::vec((0usize..14, 1u32..50), 1..10),
    ) {
        let counter = EdgeCounter::new();
        let mut button = InterruptButton::new(
            &counter,
            &counter,
            Level::Low,
            NavigationEvent::Next,
            TIMING,
        );

        // Pressed and held for 280ms, bouncing edges at random ticks
        counter.record();
        counter.publish_level(Level::Low);
        let mut events = 0;
        for tick in 0..14usize {
            for (at, edges) in &bursts {
                if *at == tick {
                    for _ in 0..*edges {
                        counter.record();
                    }
                }
            }
            if button.poll_event(tick as u64 * 20) == NavigationEvent::Next {
                events += 1;
            }
        }

        prop_assert_eq!(events, 1);
        prop_assert_eq!(counter.pending(), 0);
    }

    #[test]
    fn edges_on_an_idle_line_never_emit(
        bursts in prop::collection::vec(0u32..20, 1..50),
    ) {
        let counter = EdgeCounter::new();
        let mut button = InterruptButton::new(
            &counter,
            &counter,
            Level::Low,
            NavigationEvent::Next,
            TIMING,
        );

        for (tick, edges) in bursts.iter().enumerate() {
            for _ in 0..*edges {
                counter.record();
            }
            prop_assert_eq!(button.poll_event(tick as u64 * 20), NavigationEvent::None);
        }
    }
}
