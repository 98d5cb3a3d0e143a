//! Opens the external chat surface, either by running a configured command
//! or by handing a URL to the platform opener.

use crate::config::ChatTarget;
use crate::process::command::run_command;
use async_trait::async_trait;
use rag_copilot_application::ports::chat_launcher::ChatLauncherPort;
use rag_copilot_application::ports::sink::SinkError;
use tracing::info;

/// URL openers for a platform, most preferred first
fn openers(os: &str) -> Vec<Vec<&'static str>> {
    match os {
        "macos" => vec![vec!["open"]],
        "windows" => vec![vec!["cmd", "/C", "start", ""]],
        _ => vec![vec!["xdg-open"], vec!["wslview"]],
    }
}

/// [`ChatLauncherPort`] driven by a [`ChatTarget`].
#[derive(Debug, Clone)]
pub struct CommandChatLauncher {
    target: ChatTarget,
}

impl CommandChatLauncher {
    pub fn new(target: ChatTarget) -> Self {
        Self { target }
    }

    fn argv(&self) -> Result<Vec<String>, SinkError> {
        match &self.target {
            ChatTarget::Command(argv) => Ok(argv.clone()),
            ChatTarget::Url(url) => {
                let opener = openers(std::env::consts::OS)
                    .into_iter()
                    .find(|argv| which::which(argv[0]).is_ok())
                    .ok_or_else(|| SinkError::Unavailable("a URL opener".to_string()))?;
                let mut argv: Vec<String> = opener.into_iter().map(str::to_string).collect();
                argv.push(url.clone());
                Ok(argv)
            }
        }
    }
}

#[async_trait]
impl ChatLauncherPort for CommandChatLauncher {
    async fn open_chat(&self) -> Result<(), SinkError> {
        let argv = self.argv()?;
        info!("Opening chat: {}", argv.join(" "));
        run_command(&argv).await
    }
}
