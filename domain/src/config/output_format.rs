//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for the final run summary
///
/// Text is meant for people at a terminal; JSON for scripts wrapping the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored human-readable summary (default)
    #[default]
    Text,
    /// JSON summary on stdout
    Json,
}
