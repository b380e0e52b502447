//! Status page renderer
//!
//! Lays out a [`StatusView`] on a 128x64 surface: a header with the page
//! title (and the alarm banner while the alarm is active), then the page
//! body.

use core::fmt::Write;

use embedded_graphics::prelude::{Point, Size};
use heapless::String;
use smarthub_core::config::DisplayConfig;
use smarthub_core::menu::{Page, PAGE_COUNT};
use smarthub_core::sensor::Distance;
use smarthub_core::traits::{StatusRenderer, StatusView};
use smarthub_hal::ADC_MAX;

use crate::backend::{DisplayError, DisplaySurface, Shape, TextSize};
use crate::format;

/// Header separator row
const HEADER_LINE_Y: i32 = 13;

/// Body text rows
const ROW_1: i32 = 18;
const ROW_2: i32 = 32;
const ROW_3: i32 = 46;

/// Distance/light bar frame
const BAR_FRAME: (Point, Size) = (Point::new(0, 45), Size::new(128, 10));
const BAR_ORIGIN: Point = Point::new(2, 47);
const BAR_HEIGHT: u32 = 6;
const BAR_MAX_WIDTH: u32 = 124;

/// Radar bar distance range (cm)
const RADAR_NEAR_CM: u16 = 2;
const RADAR_FAR_CM: u16 = 100;

/// Boot splash progress bar
const SPLASH_BAR_WIDTH: u32 = 84;
const SPLASH_STEPS: u32 = 4;

/// Text buffer for one display line
type Line = String<24>;

/// Width of the radar bar for a distance
///
/// Near objects fill the bar; at 100cm and beyond it is empty.
pub fn radar_bar_width(distance: Distance) -> u32 {
    match distance {
        Distance::Invalid => 0,
        Distance::Cm(cm) => {
            let cm = cm.clamp(RADAR_NEAR_CM, RADAR_FAR_CM);
            let span = (RADAR_FAR_CM - RADAR_NEAR_CM) as u32;
            (RADAR_FAR_CM - cm) as u32 * BAR_MAX_WIDTH / span
        }
    }
}

/// Width of the light bar for a raw light level
pub fn light_bar_width(light: u16) -> u32 {
    light.min(ADC_MAX) as u32 * BAR_MAX_WIDTH / ADC_MAX as u32
}

/// Draws status views on a display surface
pub struct PageRenderer<S> {
    surface: S,
    dark_below: u16,
}

impl<S: DisplaySurface> PageRenderer<S> {
    pub fn new(surface: S, config: &DisplayConfig) -> Self {
        Self {
            surface,
            dark_below: config.dark_below,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn text_at(&mut self, x: i32, y: i32, text: &str) -> Result<(), DisplayError> {
        self.surface.set_cursor(x, y);
        self.surface.draw_text(text)
    }

    fn bar(&mut self, width: u32) -> Result<(), DisplayError> {
        let (top_left, size) = BAR_FRAME;
        self.surface.draw_shape(Shape::Rect {
            top_left,
            size,
            filled: false,
        })?;
        if width > 0 {
            self.surface.draw_shape(Shape::Rect {
                top_left: BAR_ORIGIN,
                size: Size::new(width.min(BAR_MAX_WIDTH), BAR_HEIGHT),
                filled: true,
            })?;
        }
        Ok(())
    }

    fn splash(&mut self) -> Result<(), DisplayError> {
        self.surface.clear()?;
        self.surface.set_text_size(TextSize::Large);
        self.text_at(20, 14, "SmartHub")?;
        self.surface.set_text_size(TextSize::Normal);
        self.surface.draw_shape(Shape::Rect {
            top_left: Point::new(20, 45),
            size: Size::new(88, 8),
            filled: false,
        })?;

        // Progress bar fills from empty to full, one frame per step
        for step in 1..=SPLASH_STEPS {
            self.surface.draw_shape(Shape::Rect {
                top_left: Point::new(22, 47),
                size: Size::new(SPLASH_BAR_WIDTH * step / SPLASH_STEPS, 4),
                filled: true,
            })?;
            self.surface.present()?;
        }
        Ok(())
    }

    fn header(&mut self, view: &StatusView) -> Result<(), DisplayError> {
        let mut title = Line::new();
        let _ = write!(title, "{}. {}", view.page.index() + 1, view.page.title());
        self.text_at(0, 2, &title)?;

        if view.alarm.active {
            self.text_at(80, 2, "!ALARM")?;
        } else {
            let mut position = Line::new();
            let _ = write!(position, "{}/{}", view.page.index() + 1, PAGE_COUNT);
            self.text_at(104, 2, &position)?;
        }

        self.surface.draw_shape(Shape::Line {
            start: Point::new(0, HEADER_LINE_Y),
            end: Point::new(127, HEADER_LINE_Y),
        })
    }

    fn overview(&mut self, view: &StatusView) -> Result<(), DisplayError> {
        let snap = &view.snapshot;
        let mut line = Line::new();

        let _ = write!(line, "Temp: {} C", format::reading_x10(snap.temperature_x10));
        self.text_at(0, ROW_1, &line)?;

        line.clear();
        let _ = write!(line, "Hum:  {} %", format::reading_x10(snap.humidity_x10));
        self.text_at(0, ROW_2, &line)?;

        self.surface.draw_shape(Shape::Circle {
            top_left: Point::new(85, 30),
            diameter: 31,
            filled: false,
        })
    }

    fn radar(&mut self, view: &StatusView) -> Result<(), DisplayError> {
        let distance = view.snapshot.distance;
        let mut line = Line::new();
        let _ = write!(line, "Dist: {}", format::distance(distance));
        self.text_at(0, ROW_1, &line)?;

        self.bar(radar_bar_width(distance))
    }

    fn light(&mut self, view: &StatusView) -> Result<(), DisplayError> {
        let light = view.snapshot.light;
        let mut line = Line::new();
        let _ = write!(line, "Light: {}", light);
        self.text_at(0, ROW_1, &line)?;

        let status = if light < self.dark_below {
            "Dark: night light"
        } else {
            "Bright"
        };
        self.text_at(0, ROW_2, status)?;

        self.bar(light_bar_width(light))
    }

    fn system_info(&mut self, view: &StatusView) -> Result<(), DisplayError> {
        let mut line = Line::new();

        let _ = write!(line, "Uptime: {} s", format::number(view.uptime_s));
        self.text_at(0, ROW_1, &line)?;

        line.clear();
        let _ = write!(line, "Threshold: {}", view.threshold);
        self.text_at(0, ROW_2, &line)?;

        let status = if view.alarm.active {
            "Alarm: ACTIVE"
        } else {
            "Alarm: OK"
        };
        self.text_at(0, ROW_3, status)
    }
}

impl<S: DisplaySurface> StatusRenderer for PageRenderer<S> {
    type Error = DisplayError;

    fn init(&mut self) -> Result<(), DisplayError> {
        self.surface.init()?;
        self.splash()
    }

    fn render(&mut self, view: &StatusView) -> Result<(), DisplayError> {
        self.surface.clear()?;
        self.surface.set_text_size(TextSize::Normal);
        self.header(view)?;

        match view.page {
            Page::Overview => self.overview(view)?,
            Page::Radar => self.radar(view)?,
            Page::Light => self.light(view)?,
            Page::SystemInfo => self.system_info(view)?,
        }

        self.surface.present()
    }
}
