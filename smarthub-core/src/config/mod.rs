//! Configuration types
//!
//! Board-agnostic configuration structures. The firmware compiles its
//! `hub.toml` into a postcard blob at build time; nothing is persisted at
//! runtime.

pub mod types;

pub use types::*;
