//! Display surface trait
//!
//! Defines the drawing interface the status pages are written against.

use embedded_graphics::prelude::{Point, Size};

/// Display surface errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Display did not acknowledge its initialization sequence
    InitFailed,
    /// Communication error while presenting a frame
    Bus,
    /// Drawing position outside the surface
    OutOfBounds,
}

/// Text size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextSize {
    /// 6x10 glyphs (21 columns)
    #[default]
    Normal,
    /// 10x20 glyphs for headline values
    Large,
}

/// Shape primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// One-pixel line
    Line { start: Point, end: Point },
    /// Rectangle outline or filled box
    Rect {
        top_left: Point,
        size: Size,
        filled: bool,
    },
    /// Circle outline or disc
    Circle {
        top_left: Point,
        diameter: u32,
        filled: bool,
    },
}

/// Display surface
///
/// Drawing goes to an off-screen frame; nothing is visible until
/// [`present`](Self::present).
pub trait DisplaySurface {
    /// Bring up the panel
    fn init(&mut self) -> Result<(), DisplayError>;

    /// Clear the frame
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Move the text cursor (top-left of the next glyph)
    fn set_cursor(&mut self, x: i32, y: i32);

    fn set_text_size(&mut self, size: TextSize);

    /// Draw text at the cursor and advance the cursor past it
    fn draw_text(&mut self, text: &str) -> Result<(), DisplayError>;

    fn draw_shape(&mut self, shape: Shape) -> Result<(), DisplayError>;

    /// Push the frame to the panel
    fn present(&mut self) -> Result<(), DisplayError>;

    /// Surface size in pixels as `(width, height)`
    fn dimensions(&self) -> (u32, u32);
}
