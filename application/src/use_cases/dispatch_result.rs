//! Dispatch Result use case.
//!
//! Delivers an [`ExtractedPrompt`] to the user, in order:
//!
//! 1. Clipboard (only when `auto_copy_clipboard` is set)
//! 2. A new text surface beside the current view
//! 3. Completion notification offering [`FollowUpAction`]s
//! 4. The chosen (or defaulted) follow-up
//!
//! Every step is best-effort. A failing sink is reported through the
//! notifier and recorded in the [`DeliveryReport`], and later steps still run.

use crate::ports::chat_launcher::ChatLauncherPort;
use crate::ports::clipboard::ClipboardPort;
use crate::ports::notifier::NotifierPort;
use crate::ports::progress::ProgressNotifier;
use crate::ports::sink::{SinkError, SinkKind};
use crate::ports::text_surface::TextSurfacePort;
use rag_copilot_domain::{
    ExtractedPrompt, FollowUpAction, ProgressStage, Settings, completion_message,
    resolve_follow_up,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Language id given to the text surface
const SURFACE_LANGUAGE: &str = "markdown";

/// A delivery step that failed without aborting the flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SinkFailure {
    pub sink: SinkKind,
    pub message: String,
}

/// What the dispatcher did with the prompt
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeliveryReport {
    /// Number of successful clipboard writes (initial copy plus "copy again")
    pub clipboard_writes: usize,
    /// Where the text surface was opened
    pub surface_location: Option<String>,
    /// Follow-up that was carried out, explicit or defaulted
    pub follow_up: Option<FollowUpAction>,
    /// Whether the follow-up came from the timeout default
    pub follow_up_defaulted: bool,
    pub sink_failures: Vec<SinkFailure>,
}

impl DeliveryReport {
    pub fn has_failures(&self) -> bool {
        !self.sink_failures.is_empty()
    }
}

/// Output sinks the dispatcher writes to
#[derive(Clone)]
pub struct DeliverySinks {
    pub clipboard: Arc<dyn ClipboardPort>,
    pub surface: Arc<dyn TextSurfacePort>,
    pub chat: Arc<dyn ChatLauncherPort>,
}

/// Use case for delivering an extracted prompt.
#[derive(Clone)]
pub struct DispatchResultUseCase {
    sinks: DeliverySinks,
    notifier: Arc<dyn NotifierPort>,
}

impl DispatchResultUseCase {
    pub fn new(sinks: DeliverySinks, notifier: Arc<dyn NotifierPort>) -> Self {
        Self { sinks, notifier }
    }

    pub async fn execute(
        &self,
        prompt: &ExtractedPrompt,
        settings: &Settings,
        progress: &dyn ProgressNotifier,
    ) -> DeliveryReport {
        let mut report = DeliveryReport::default();

        progress.on_stage(ProgressStage::ProcessingResult);

        let mut copied = false;
        if settings.auto_copy_clipboard {
            match self.sinks.clipboard.write_text(prompt.text()).await {
                Ok(()) => {
                    debug!("Prompt copied to clipboard ({} bytes)", prompt.text().len());
                    report.clipboard_writes += 1;
                    copied = true;
                }
                Err(e) => self.record_failure(&mut report, SinkKind::Clipboard, e),
            }
        }

        match self
            .sinks
            .surface
            .open_beside(prompt.text(), SURFACE_LANGUAGE)
            .await
        {
            Ok(location) => {
                info!("Prompt opened at {}", location);
                report.surface_location = Some(location);
            }
            Err(e) => self.record_failure(&mut report, SinkKind::TextSurface, e),
        }

        progress.on_stage(ProgressStage::Done);

        let selection = self
            .notifier
            .offer_follow_up(
                &format!("✅ {}", completion_message(copied)),
                &FollowUpAction::ALL,
                settings.notification_timeout,
            )
            .await;

        let follow_up = resolve_follow_up(selection, settings.auto_open_chat);
        report.follow_up = follow_up;
        report.follow_up_defaulted = selection.is_none() && follow_up.is_some();

        match follow_up {
            Some(FollowUpAction::OpenChat) => {
                debug!(
                    "Opening chat ({})",
                    if report.follow_up_defaulted { "default" } else { "selected" }
                );
                if let Err(e) = self.sinks.chat.open_chat().await {
                    self.record_failure(&mut report, SinkKind::ChatLauncher, e);
                }
            }
            Some(FollowUpAction::CopyAgain) => {
                match self.sinks.clipboard.write_text(prompt.text()).await {
                    Ok(()) => {
                        report.clipboard_writes += 1;
                        self.notifier.info("Copied to clipboard!");
                    }
                    Err(e) => self.record_failure(&mut report, SinkKind::Clipboard, e),
                }
            }
            None => {}
        }

        report
    }

    fn record_failure(&self, report: &mut DeliveryReport, sink: SinkKind, error: SinkError) {
        warn!("Delivery to {} failed: {}", sink, error);
        let message = error.to_string();
        self.notifier
            .warn(&format!("Could not deliver to {}: {}", sink, message));
        report.sink_failures.push(SinkFailure { sink, message });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use crate::use_cases::test_support::{
        MockChat, MockClipboard, MockNotifier, MockSurface, prompt_from,
    };

    struct Fixture {
        clipboard: Arc<MockClipboard>,
        surface: Arc<MockSurface>,
        chat: Arc<MockChat>,
        notifier: Arc<MockNotifier>,
        use_case: DispatchResultUseCase,
    }

    fn fixture(
        clipboard: MockClipboard,
        surface: MockSurface,
        notifier: MockNotifier,
    ) -> Fixture {
        let clipboard = Arc::new(clipboard);
        let surface = Arc::new(surface);
        let chat = Arc::new(MockChat::new());
        let notifier = Arc::new(notifier);
        let use_case = DispatchResultUseCase::new(
            DeliverySinks {
                clipboard: clipboard.clone(),
                surface: surface.clone(),
                chat: chat.clone(),
            },
            notifier.clone(),
        );
        Fixture {
            clipboard,
            surface,
            chat,
            notifier,
            use_case,
        }
    }

    #[tokio::test]
    async fn test_copy_surface_and_selected_chat() {
        let f = fixture(
            MockClipboard::new(),
            MockSurface::new(),
            MockNotifier::answering(Some(FollowUpAction::OpenChat)),
        );
        let prompt = prompt_from("Use <DataTable>");

        let report = f
            .use_case
            .execute(&prompt, &Settings::default(), &NoProgress)
            .await;

        assert_eq!(f.clipboard.writes(), vec!["Use <DataTable>".to_string()]);
        assert_eq!(f.surface.opened(), vec!["Use <DataTable>".to_string()]);
        assert_eq!(f.chat.open_count(), 1);
        assert_eq!(report.follow_up, Some(FollowUpAction::OpenChat));
        assert!(!report.follow_up_defaulted);
        assert_eq!(
            f.notifier.offered_messages(),
            vec!["✅ Prompt generated and copied to clipboard!".to_string()]
        );
    }

    #[tokio::test]
    async fn test_auto_copy_disabled_with_default_chat() {
        let f = fixture(
            MockClipboard::new(),
            MockSurface::new(),
            MockNotifier::answering(None),
        );
        let settings = Settings {
            auto_copy_clipboard: false,
            auto_open_chat: true,
            ..Settings::default()
        };

        let report = f
            .use_case
            .execute(&prompt_from("prompt"), &settings, &NoProgress)
            .await;

        assert!(f.clipboard.writes().is_empty());
        assert_eq!(f.surface.opened().len(), 1);
        assert_eq!(f.chat.open_count(), 1);
        assert!(report.follow_up_defaulted);
        assert_eq!(f.notifier.offered_messages(), vec!["✅ Prompt generated!".to_string()]);
    }

    #[tokio::test]
    async fn test_unanswered_without_auto_open_does_nothing() {
        let f = fixture(
            MockClipboard::new(),
            MockSurface::new(),
            MockNotifier::answering(None),
        );
        let settings = Settings {
            auto_open_chat: false,
            ..Settings::default()
        };

        let report = f
            .use_case
            .execute(&prompt_from("prompt"), &settings, &NoProgress)
            .await;

        assert_eq!(f.chat.open_count(), 0);
        assert_eq!(report.follow_up, None);
        assert_eq!(f.clipboard.writes().len(), 1);
    }

    #[tokio::test]
    async fn test_copy_again_writes_twice_and_confirms() {
        let f = fixture(
            MockClipboard::new(),
            MockSurface::new(),
            MockNotifier::answering(Some(FollowUpAction::CopyAgain)),
        );

        let report = f
            .use_case
            .execute(&prompt_from("again"), &Settings::default(), &NoProgress)
            .await;

        assert_eq!(f.clipboard.writes().len(), 2);
        assert_eq!(report.clipboard_writes, 2);
        assert!(f.notifier.infos().contains(&"Copied to clipboard!".to_string()));
        assert_eq!(f.chat.open_count(), 0);
    }

    #[tokio::test]
    async fn test_clipboard_failure_does_not_stop_delivery() {
        let f = fixture(
            MockClipboard::failing(),
            MockSurface::new(),
            MockNotifier::answering(None),
        );

        let report = f
            .use_case
            .execute(&prompt_from("prompt"), &Settings::default(), &NoProgress)
            .await;

        assert_eq!(f.surface.opened().len(), 1);
        assert_eq!(f.chat.open_count(), 1);
        assert_eq!(report.sink_failures.len(), 1);
        assert_eq!(report.sink_failures[0].sink, SinkKind::Clipboard);
        assert_eq!(f.notifier.warnings().len(), 1);
        // Nothing was copied, so the notification must not claim it was.
        assert_eq!(f.notifier.offered_messages(), vec!["✅ Prompt generated!".to_string()]);
    }

    #[tokio::test]
    async fn test_surface_failure_is_reported() {
        let f = fixture(
            MockClipboard::new(),
            MockSurface::failing(),
            MockNotifier::answering(None),
        );

        let report = f
            .use_case
            .execute(&prompt_from("prompt"), &Settings::default(), &NoProgress)
            .await;

        assert!(report.surface_location.is_none());
        assert!(report.has_failures());
        assert_eq!(report.sink_failures[0].sink, SinkKind::TextSurface);
        assert_eq!(f.clipboard.writes().len(), 1);
    }
}
