//! External trigger identifiers and their presets.

pub mod trigger;
