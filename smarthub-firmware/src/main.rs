//! SmartHub - Multi-Sensor Monitoring Terminal Firmware
//!
//! Main firmware binary for RP2040 boards. One cooperative loop polls the
//! navigation inputs, samples the sensors at the configured interval,
//! drives the alarm outputs and refreshes the OLED status pages.
//!
//! # Wiring
//!
//! | Function            | Pin             |
//! |---------------------|-----------------|
//! | Joystick X          | GP26 / ADC0     |
//! | Light sensor (LDR)  | GP27 / ADC1     |
//! | Threshold pot       | GP28 / ADC2     |
//! | DHT11 data          | GP2             |
//! | HC-SR04 trig / echo | GP3 / GP4       |
//! | Buzzer              | GP5             |
//! | Next-page button    | GP15 (to GND)   |
//! | RGB LED R / G / B   | GP16 / 17 / 18  |
//! | SSD1306 SDA / SCL   | GP20 / GP21     |

#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::{Flex, Input, Level, Output, Pull};
use embassy_rp::i2c::{Config as I2cConfig, I2c};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_time::{with_timeout, Delay, Duration, Ticker, Timer};
use {defmt_rtt as _, panic_probe as _};

use smarthub_core::control::{ControlLoop, StartupError};
use smarthub_core::input::{
    AxisDeadband, AxisInput, DebounceTiming, EdgeCounter, InterruptButton, NavigationEvent,
};
use smarthub_core::sensor::SensorReader;
use smarthub_display::{PageRenderer, Ssd1306};
use smarthub_drivers::eh::{EhInput, EhOutput, EhPwm};
use smarthub_drivers::feedback::{AlarmOutputs, Buzzer, RgbLed};
use smarthub_drivers::sensor::{Dht11, HcSr04};

use crate::board::{AdcInput, EmbassyClock, OpenDrainLine, SharedAdc};

mod board;
mod config;

/// Control loop period
const TICK_INTERVAL_MS: u64 = 20;

/// SSD1306 bus speed
const I2C_FREQUENCY_HZ: u32 = 400_000;

/// Upper bound on how stale the published button level can get
const BUTTON_LEVEL_REFRESH: Duration = Duration::from_millis(10);

/// Edges and level of the next-page button
static NEXT_BUTTON_EDGES: EdgeCounter = EdgeCounter::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("SmartHub firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load();
    let clock = EmbassyClock;

    // Analog inputs share the one converter
    let adc: SharedAdc = RefCell::new(Adc::new_blocking(p.ADC, AdcConfig::default()));
    let joystick_x = AdcInput::new(&adc, Channel::new_pin(p.PIN_26, Pull::None));
    let light = AdcInput::new(&adc, Channel::new_pin(p.PIN_27, Pull::None));
    let threshold_pot = AdcInput::new(&adc, Channel::new_pin(p.PIN_28, Pull::None));

    let dht = Dht11::new(OpenDrainLine::new(Flex::new(p.PIN_2)), Delay, clock);
    let ranger = HcSr04::new(
        EhOutput::new(Output::new(p.PIN_3, Level::Low)),
        EhInput::new(Input::new(p.PIN_4, Pull::Down)),
        Delay,
        clock,
    );
    let sensors = SensorReader::new(
        dht,
        light,
        ranger,
        threshold_pot,
        config.sampling.pulse_timeout_us,
    );
    info!("Sensors initialized");

    // Navigation: joystick X steps pages, the button always goes forward
    unwrap!(spawner.spawn(button_edge_task(Input::new(p.PIN_15, Pull::Up))));
    let next_button = InterruptButton::new(
        &NEXT_BUTTON_EDGES,
        &NEXT_BUTTON_EDGES,
        smarthub_hal::Level::Low,
        NavigationEvent::Next,
        DebounceTiming::button(&config.input),
    );
    let joystick = AxisInput::new(
        joystick_x,
        AxisDeadband::from_config(&config.input),
        DebounceTiming::axis(&config.input),
    );
    let inputs = (next_button, joystick);

    // Alarm feedback
    let (red, green) = Pwm::new_output_ab(
        p.PWM_SLICE0,
        p.PIN_16,
        p.PIN_17,
        PwmConfig::default(),
    )
    .split();
    let (blue, _) = Pwm::new_output_a(p.PWM_SLICE1, p.PIN_18, PwmConfig::default()).split();
    let led = RgbLed::new(
        EhPwm::new(unwrap!(red)),
        EhPwm::new(unwrap!(green)),
        EhPwm::new(unwrap!(blue)),
        false,
    );
    let buzzer = Buzzer::new_active_high(EhOutput::new(Output::new(p.PIN_5, Level::Low)));
    let outputs = AlarmOutputs::new(buzzer, led);
    info!("Feedback outputs initialized");

    let mut i2c_config = I2cConfig::default();
    i2c_config.frequency = I2C_FREQUENCY_HZ;
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_21, p.PIN_20, i2c_config);
    let renderer = PageRenderer::new(Ssd1306::new(i2c), &config.display);

    let mut hub = ControlLoop::new(&config, sensors, inputs, outputs, renderer, clock);

    if let Err(e) = hub.start() {
        error!("Startup failed: {:?}", e);
        match e {
            StartupError::DisplayInit => error!("Check the SSD1306 wiring on GP20/GP21"),
        }

        // Never run headless: beep until someone power-cycles the unit
        let buzzer = hub.indicator_mut().buzzer_mut();
        loop {
            buzzer.set_on(true);
            Timer::after_millis(200).await;
            buzzer.set_on(false);
            Timer::after_millis(800).await;
        }
    }

    info!("SmartHub running, tick every {} ms", TICK_INTERVAL_MS);

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));
    loop {
        let report = hub.tick();

        if report.sampled {
            trace!(
                "Sample: threshold={} alarm={} render_failures={}",
                hub.threshold(),
                hub.alarm().active,
                hub.render_failures()
            );
        }

        ticker.next().await;
    }
}

/// Records edges and publishes the level of the next-page button
///
/// Does nothing else; debouncing happens in the control loop when the
/// counter is drained.
#[embassy_executor::task]
async fn button_edge_task(mut button: Input<'static>) {
    loop {
        NEXT_BUTTON_EDGES.publish_level(smarthub_hal::Level::from(button.is_high()));
        if with_timeout(BUTTON_LEVEL_REFRESH, button.wait_for_any_edge())
            .await
            .is_ok()
        {
            NEXT_BUTTON_EDGES.record();
        }
    }
}
