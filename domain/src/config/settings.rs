//! Per-invocation settings

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Placeholder in path templates that expands to the workspace root
pub const WORKSPACE_PLACEHOLDER: &str = "${workspaceFolder}";

/// Default bound on captured script output (10 MiB)
pub const DEFAULT_MAX_OUTPUT_BYTES: usize = 10 * 1024 * 1024;

/// Settings read once at the start of an invocation.
///
/// Passed explicitly into the use case; nothing in the flow writes to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Interpreter used to run the script (e.g. `python3`)
    pub interpreter_path: String,
    /// Script directory template, may contain [`WORKSPACE_PLACEHOLDER`]
    pub script_directory: String,
    /// Script file name inside the script directory
    pub script_name: String,
    /// Open the chat surface when the completion notification goes unanswered
    pub auto_open_chat: bool,
    /// Copy the prompt to the clipboard right after extraction
    pub auto_copy_clipboard: bool,
    /// Upper bound on combined stdout + stderr of the script
    pub max_output_bytes: usize,
    /// How long the completion notification waits for an answer
    pub notification_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            interpreter_path: "python3".to_string(),
            script_directory: format!("{}/RAG", WORKSPACE_PLACEHOLDER),
            script_name: "quick_query.py".to_string(),
            auto_open_chat: true,
            auto_copy_clipboard: true,
            max_output_bytes: DEFAULT_MAX_OUTPUT_BYTES,
            notification_timeout: Duration::from_secs(10),
        }
    }
}

impl Settings {
    /// Script directory with the workspace placeholder expanded
    pub fn resolve_script_directory(&self, workspace_root: &Path) -> PathBuf {
        resolve_template(&self.script_directory, workspace_root)
    }
}

/// Expand [`WORKSPACE_PLACEHOLDER`] in `template` with `workspace_root`.
///
/// Only the first occurrence is replaced.
pub fn resolve_template(template: &str, workspace_root: &Path) -> PathBuf {
    PathBuf::from(template.replacen(
        WORKSPACE_PLACEHOLDER,
        &workspace_root.to_string_lossy(),
        1,
    ))
}
