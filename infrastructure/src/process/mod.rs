//! Subprocess adapters
//!
//! - [`script_runner`]: runs the external RAG script with bounded capture
//! - [`command`]: short-lived helper commands used by the delivery sinks

pub mod command;
pub mod script_runner;

pub use script_runner::TokioScriptRunner;
