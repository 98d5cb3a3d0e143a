//! Presentation layer for rag-copilot
//!
//! This crate contains CLI definitions, the terminal input and notification
//! adapters, progress reporters, and output formatting.

pub mod cli;
pub mod interaction;
pub mod notification;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use interaction::TerminalInput;
pub use notification::ConsoleNotifier;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
