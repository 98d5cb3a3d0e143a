//! Delivery configuration from TOML (`[delivery]` section)

use serde::{Deserialize, Serialize};

/// Default chat surface opened by the "Open Copilot Chat" follow-up
pub const DEFAULT_CHAT_URL: &str = "https://github.com/copilot";

/// Where "Open Copilot Chat" goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatTarget {
    /// Open a URL with the platform opener
    Url(String),
    /// Run a command (program followed by arguments)
    Command(Vec<String>),
}

/// Raw `[delivery]` configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDeliveryConfig {
    /// Open the chat when the completion notification goes unanswered
    pub auto_open_copilot: bool,
    /// Copy the prompt to the clipboard after extraction
    pub auto_copy_clipboard: bool,
    /// Lifetime of the completion notification
    pub notification_timeout_secs: u64,
    /// Chat URL, used when `chat_command` is not set
    pub chat_url: String,
    /// Command that opens the chat; takes precedence over `chat_url`
    pub chat_command: Option<Vec<String>>,
    /// Command that reads clipboard text from stdin; auto-detected when unset
    pub clipboard_command: Option<Vec<String>>,
}

impl Default for FileDeliveryConfig {
    fn default() -> Self {
        Self {
            auto_open_copilot: true,
            auto_copy_clipboard: true,
            notification_timeout_secs: 10,
            chat_url: DEFAULT_CHAT_URL.to_string(),
            chat_command: None,
            clipboard_command: None,
        }
    }
}

impl FileDeliveryConfig {
    /// Resolved chat target, `None` when neither a command nor a URL is set
    pub fn chat_target(&self) -> Option<ChatTarget> {
        match &self.chat_command {
            Some(argv) if !argv.is_empty() => Some(ChatTarget::Command(argv.clone())),
            _ if !self.chat_url.trim().is_empty() => {
                Some(ChatTarget::Url(self.chat_url.trim().to_string()))
            }
            _ => None,
        }
    }
}
