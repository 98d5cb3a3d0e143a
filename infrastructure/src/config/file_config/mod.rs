//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into the domain
//! [`Settings`] once per invocation.
//!
//! ```toml
//! [rag]
//! python_path = "python3"
//! rag_path = "${workspaceFolder}/RAG"
//!
//! [delivery]
//! auto_open_copilot = true
//! auto_copy_clipboard = true
//! ```

mod delivery;
mod output;
mod rag;
mod surface;

pub use delivery::{ChatTarget, DEFAULT_CHAT_URL, FileDeliveryConfig};
pub use output::FileOutputConfig;
pub use rag::FileRagConfig;
pub use surface::FileSurfaceConfig;

use rag_copilot_domain::Settings;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Problems found by [`FileConfig::validate`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("rag.python_path cannot be empty")]
    EmptyInterpreter,

    #[error("rag.script cannot be empty")]
    EmptyScript,

    #[error("rag.max_output_bytes cannot be 0")]
    ZeroOutputLimit,

    #[error("{field} must not be an empty command")]
    EmptyCommand { field: &'static str },

    #[error("delivery.chat_url and delivery.chat_command are both empty")]
    NoChatTarget,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// External script settings
    pub rag: FileRagConfig,
    /// Clipboard, notification and chat settings
    pub delivery: FileDeliveryConfig,
    /// Text surface settings
    pub surface: FileSurfaceConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Domain settings for one invocation
    pub fn to_settings(&self) -> Settings {
        Settings {
            interpreter_path: self.rag.python_path.clone(),
            script_directory: self.rag.rag_path.clone(),
            script_name: self.rag.script.clone(),
            auto_open_chat: self.delivery.auto_open_copilot,
            auto_copy_clipboard: self.delivery.auto_copy_clipboard,
            max_output_bytes: self.rag.max_output_bytes,
            notification_timeout: Duration::from_secs(self.delivery.notification_timeout_secs),
        }
    }

    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.rag.python_path.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyInterpreter);
        }
        if self.rag.script.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyScript);
        }
        if self.rag.max_output_bytes == 0 {
            issues.push(ConfigValidationError::ZeroOutputLimit);
        }

        let commands = [
            ("delivery.chat_command", &self.delivery.chat_command),
            ("delivery.clipboard_command", &self.delivery.clipboard_command),
            ("surface.open_command", &self.surface.open_command),
        ];
        for (field, command) in commands {
            if matches!(command, Some(argv) if argv.first().is_none_or(|p| p.trim().is_empty())) {
                issues.push(ConfigValidationError::EmptyCommand { field });
            }
        }

        if self.delivery.chat_target().is_none() {
            issues.push(ConfigValidationError::NoChatTarget);
        }

        issues
    }
}
