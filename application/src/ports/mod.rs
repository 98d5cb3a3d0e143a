//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod chat_launcher;
pub mod clipboard;
pub mod input;
pub mod notifier;
pub mod progress;
pub mod script_runner;
pub mod sink;
pub mod text_surface;
