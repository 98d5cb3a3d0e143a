//! Shared error type for delivery sinks (clipboard, text surface, chat).

use serde::Serialize;
use thiserror::Error;

/// Which delivery step failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SinkKind {
    Clipboard,
    TextSurface,
    ChatLauncher,
}

impl std::fmt::Display for SinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SinkKind::Clipboard => write!(f, "clipboard"),
            SinkKind::TextSurface => write!(f, "text surface"),
            SinkKind::ChatLauncher => write!(f, "chat"),
        }
    }
}

/// Error returned by a delivery sink.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SinkError {
    #[error("{0} is not available on this system")]
    Unavailable(String),

    #[error("command '{command}' failed: {message}")]
    CommandFailed { command: String, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for SinkError {
    fn from(e: std::io::Error) -> Self {
        SinkError::Io(e.to_string())
    }
}
