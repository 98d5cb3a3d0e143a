//! System clipboard via the platform's clipboard tool.
//!
//! | Platform | Tools tried, in order |
//! |----------|-----------------------|
//! | macOS | `pbcopy` |
//! | Windows | `clip` |
//! | Linux (Wayland) | `wl-copy`, `xclip`, `xsel`, `clip.exe` |
//! | Linux (X11) | `xclip`, `xsel`, `wl-copy`, `clip.exe` |
//!
//! `clip.exe` covers WSL. A configured `clipboard_command` bypasses detection.

use crate::process::command::pipe_to_command;
use async_trait::async_trait;
use rag_copilot_application::ports::clipboard::ClipboardPort;
use rag_copilot_application::ports::sink::SinkError;
use tracing::debug;

/// Clipboard tools for a platform, most preferred first
fn candidates(os: &str, wayland: bool) -> Vec<Vec<&'static str>> {
    let wl = vec!["wl-copy"];
    let xclip = vec!["xclip", "-selection", "clipboard"];
    let xsel = vec!["xsel", "--clipboard", "--input"];
    let wsl = vec!["clip.exe"];

    match os {
        "macos" => vec![vec!["pbcopy"]],
        "windows" => vec![vec!["clip"]],
        _ if wayland => vec![wl, xclip, xsel, wsl],
        _ => vec![xclip, xsel, wl, wsl],
    }
}

/// [`ClipboardPort`] that pipes text into a clipboard command.
#[derive(Debug, Clone, Default)]
pub struct SystemClipboard {
    command: Option<Vec<String>>,
}

impl SystemClipboard {
    /// Use `command` when given, otherwise detect a tool on each write.
    pub fn new(command: Option<Vec<String>>) -> Self {
        Self { command }
    }

    /// First clipboard tool found on `PATH`
    pub fn detect() -> Option<Vec<String>> {
        let wayland = std::env::var_os("WAYLAND_DISPLAY").is_some();
        candidates(std::env::consts::OS, wayland)
            .into_iter()
            .find(|argv| which::which(argv[0]).is_ok())
            .map(|argv| argv.into_iter().map(str::to_string).collect())
    }

    fn resolve(&self) -> Result<Vec<String>, SinkError> {
        match &self.command {
            Some(argv) if argv.first().is_some_and(|p| !p.trim().is_empty()) => Ok(argv.clone()),
            Some(_) => Err(SinkError::Unavailable(
                "a non-empty delivery.clipboard_command".to_string(),
            )),
            None => Self::detect().ok_or_else(|| {
                SinkError::Unavailable(
                    "a clipboard tool (pbcopy, wl-copy, xclip, xsel or clip)".to_string(),
                )
            }),
        }
    }
}

#[async_trait]
impl ClipboardPort for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), SinkError> {
        let argv = self.resolve()?;
        debug!("Copying prompt with {}", argv.join(" "));
        pipe_to_command(&argv, text).await
    }
}
