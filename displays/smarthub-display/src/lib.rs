//! Display surface abstraction and status pages for SmartHub
//!
//! This crate provides:
//! - `DisplaySurface` trait: the narrow set of drawing primitives the status
//!   pages need (text at a cursor, simple shapes, present)
//! - `Ssd1306`: a 128x64 I2C OLED framebuffer implementing the surface on
//!   top of `embedded-graphics`
//! - `PageRenderer`: draws a `StatusView` as one of the four status pages
//!   and implements the core `StatusRenderer` trait
//!
//! # Architecture
//!
//! ```text
//! ControlLoop ──StatusView──▶ PageRenderer ──draw commands──▶ DisplaySurface
//!                                                                  │
//!                                                       Ssd1306 (I2C OLED)
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod backend;
pub mod format;
pub mod pages;
pub mod ssd1306;

// Re-export key types
pub use backend::{DisplayError, DisplaySurface, Shape, TextSize};
pub use pages::PageRenderer;
pub use ssd1306::Ssd1306;
