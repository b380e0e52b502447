//! Control loop implementation

use smarthub_hal::Clock;

use super::gate::IntervalGate;
use crate::alarm::{AlarmEvaluator, AlarmState};
use crate::config::{HubConfig, RedrawPolicy};
use crate::input::{Events, NavigationSource};
use crate::menu::MenuController;
use crate::sensor::{SensorSnapshot, SnapshotSource};
use crate::traits::{AlarmIndicator, StatusRenderer, StatusView};

/// Fatal startup errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StartupError {
    /// Display did not come up
    DisplayInit,
}

/// What one tick did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    /// Navigation events applied, in order
    pub events: Events,
    /// A new snapshot was taken
    pub sampled: bool,
    /// The renderer was called successfully
    pub rendered: bool,
}

/// The SmartHub control loop
///
/// Call [`start`](Self::start) once, then [`tick`](Self::tick) repeatedly.
/// Ticks are cheap when nothing is due; the caller decides the tick rate.
pub struct ControlLoop<S, I, A, R, C> {
    sensors: S,
    inputs: I,
    indicator: A,
    renderer: R,
    clock: C,

    menu: MenuController,
    evaluator: AlarmEvaluator,
    sampling: IntervalGate,
    redraw: RedrawPolicy,

    snapshot: SensorSnapshot,
    alarm: AlarmState,
    last_view: Option<StatusView>,
    started_at_ms: u64,
    render_failures: u32,
}

impl<S, I, A, R, C> ControlLoop<S, I, A, R, C>
where
    S: SnapshotSource,
    I: NavigationSource,
    A: AlarmIndicator,
    R: StatusRenderer,
    C: Clock,
{
    pub fn new(
        config: &HubConfig,
        sensors: S,
        inputs: I,
        indicator: A,
        renderer: R,
        clock: C,
    ) -> Self {
        Self {
            sensors,
            inputs,
            indicator,
            renderer,
            clock,
            menu: MenuController::new(),
            evaluator: AlarmEvaluator::new(&config.alarm),
            sampling: IntervalGate::new(config.sampling.interval_ms),
            redraw: config.display.redraw,
            snapshot: SensorSnapshot::EMPTY,
            alarm: AlarmState::IDLE,
            last_view: None,
            started_at_ms: 0,
            render_failures: 0,
        }
    }

    /// Bring up the display and silence the outputs
    pub fn start(&mut self) -> Result<(), StartupError> {
        self.renderer
            .init()
            .map_err(|_| StartupError::DisplayInit)?;

        self.indicator.indicate(&AlarmState::IDLE);
        self.started_at_ms = self.clock.now_ms();
        info!("Control loop started at {} ms", self.started_at_ms);
        Ok(())
    }

    /// Run one iteration
    pub fn tick(&mut self) -> TickReport {
        let now_ms = self.clock.now_ms();

        let mut events = Events::new();
        self.inputs.poll(now_ms, &mut events);
        for event in &events {
            if self.menu.apply(*event) {
                debug!("Page -> {:?}", self.menu.current_page());
            }
        }

        let sampled = self.sampling.poll(now_ms);
        if sampled {
            self.sample(now_ms);
        }

        let view = self.view(now_ms);
        let rendered = self.render(view);

        TickReport {
            events,
            sampled,
            rendered,
        }
    }

    fn sample(&mut self, now_ms: u64) {
        self.snapshot = self.sensors.sample(now_ms);
        let alarm = self.evaluator.assess(&self.snapshot);

        if alarm.active != self.alarm.active {
            if alarm.active {
                warn!("Alarm raised (threshold {})", self.evaluator.threshold());
            } else {
                info!("Alarm cleared");
            }
        }

        self.alarm = alarm;
        self.indicator.indicate(&alarm);
    }

    fn view(&self, now_ms: u64) -> StatusView {
        let uptime_ms = now_ms.saturating_sub(self.started_at_ms);
        StatusView {
            page: self.menu.current_page(),
            snapshot: self.snapshot,
            alarm: self.alarm,
            threshold: self.evaluator.threshold(),
            uptime_s: (uptime_ms / 1000) as u32,
        }
    }

    fn render(&mut self, view: StatusView) -> bool {
        let dirty = match self.redraw {
            RedrawPolicy::Always => true,
            RedrawPolicy::OnChange => self.last_view != Some(view),
        };
        if !dirty {
            return false;
        }

        match self.renderer.render(&view) {
            Ok(()) => {
                self.last_view = Some(view);
                true
            }
            Err(_) => {
                self.render_failures = self.render_failures.saturating_add(1);
                warn!("Render failed ({} total)", self.render_failures);
                false
            }
        }
    }

    pub fn menu(&self) -> &MenuController {
        &self.menu
    }

    /// Most recent snapshot
    pub fn snapshot(&self) -> &SensorSnapshot {
        &self.snapshot
    }

    pub fn alarm(&self) -> AlarmState {
        self.alarm
    }

    pub fn threshold(&self) -> u16 {
        self.evaluator.threshold()
    }

    /// Runtime render failures since boot
    pub fn render_failures(&self) -> u32 {
        self.render_failures
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn indicator_mut(&mut self) -> &mut A {
        &mut self.indicator
    }

    pub fn sensors(&self) -> &S {
        &self.sensors
    }
}
