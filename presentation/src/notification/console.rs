//! Console implementation of the notifier port.
//!
//! Messages go to stderr so stdout stays free for the run summary. The
//! follow-up offer looks like:
//!
//! ```text
//! ✅ Prompt generated and copied to clipboard!
//!   [1] Open Copilot Chat   [2] Copy Again   (Enter to dismiss, expires in 10s)
//! ```

use async_trait::async_trait;
use colored::Colorize;
use rag_copilot_application::NotifierPort;
use rag_copilot_domain::FollowUpAction;
use std::io::{self, BufRead, IsTerminal};
use std::time::Duration;
use tokio::sync::oneshot;
use tracing::debug;

/// Interpret an answer to the follow-up offer.
///
/// Accepts a 1-based index or a word from the action label. Anything else,
/// including an empty line, dismisses the offer.
pub fn parse_follow_up(input: &str, actions: &[FollowUpAction]) -> Option<FollowUpAction> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    if let Ok(index) = input.parse::<usize>() {
        return index.checked_sub(1).and_then(|i| actions.get(i)).copied();
    }

    actions.iter().copied().find(|action| {
        action
            .label()
            .to_lowercase()
            .split_whitespace()
            .any(|word| word == input)
    })
}

/// Notifier writing to the terminal
pub struct ConsoleNotifier {
    interactive: bool,
}

impl ConsoleNotifier {
    /// Follow-up offers wait for an answer only when stdin is a terminal.
    pub fn new() -> Self {
        Self {
            interactive: io::stdin().is_terminal(),
        }
    }

    /// Notifier that never waits for an answer
    pub fn non_interactive() -> Self {
        Self { interactive: false }
    }

    fn render_actions(actions: &[FollowUpAction], lifetime: Duration) -> String {
        let choices: Vec<String> = actions
            .iter()
            .enumerate()
            .map(|(i, action)| format!("[{}] {}", i + 1, action.label()))
            .collect();
        format!(
            "  {}   {}",
            choices.join("   ").cyan(),
            format!(
                "(Enter to dismiss, expires in {}s)",
                lifetime.as_secs()
            )
            .dimmed()
        )
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotifierPort for ConsoleNotifier {
    fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message.yellow());
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.red());
    }

    async fn offer_follow_up(
        &self,
        message: &str,
        actions: &[FollowUpAction],
        lifetime: Duration,
    ) -> Option<FollowUpAction> {
        eprintln!("{}", message.green().bold());
        if !self.interactive || actions.is_empty() {
            return None;
        }
        eprintln!("{}", Self::render_actions(actions, lifetime));

        // A detached thread: a pending stdin read must not hold up shutdown
        // after the offer expires.
        let (tx, rx) = oneshot::channel();
        std::thread::spawn(move || {
            let mut line = String::new();
            if io::stdin().lock().read_line(&mut line).is_ok() {
                let _ = tx.send(line);
            }
        });

        match tokio::time::timeout(lifetime, rx).await {
            Ok(Ok(line)) => parse_follow_up(&line, actions),
            Ok(Err(_)) => None,
            Err(_) => {
                debug!("Follow-up offer expired after {:?}", lifetime);
                None
            }
        }
    }
}
