//! Page menu

pub mod controller;

pub use controller::{MenuController, MenuState, Page, PAGE_COUNT};
