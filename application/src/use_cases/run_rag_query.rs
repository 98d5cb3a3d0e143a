//! Run RAG Query use case.
//!
//! The single flow behind every trigger:
//!
//! ```text
//! workspace check ─▶ CollectInput ─▶ ScriptRunner ─▶ extract_prompt ─▶ DispatchResult
//!                        │
//!                        └─ cancelled ─▶ stop silently
//! ```
//!
//! [`RunRagQueryUseCase::execute`] returns typed errors;
//! [`RunRagQueryUseCase::run`] is the top-level boundary that turns them
//! into a user notification and a [`QueryOutcome`]. Nothing is retried.

use crate::ports::input::InputError;
use crate::ports::notifier::NotifierPort;
use crate::ports::progress::ProgressNotifier;
use crate::ports::script_runner::ScriptRunnerPort;
use crate::use_cases::collect_input::CollectInputUseCase;
use crate::use_cases::dispatch_result::{DeliveryReport, DispatchResultUseCase};
use rag_copilot_domain::{
    DomainError, ExtractedPrompt, KnowledgeSource, ProgressStage, QueryRequest, ScriptInvocation,
    Settings, extract_prompt,
};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};

/// Errors that end a query.
///
/// Cancellation is not here: it is the `Ok(None)` outcome of
/// [`RunRagQueryUseCase::execute`].
#[derive(Error, Debug)]
pub enum RagQueryError {
    #[error("No workspace folder open!")]
    NoWorkspaceOpen,

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Script error: {message}{}", stderr_suffix(.stderr))]
    SubprocessFailure { message: String, stderr: String },

    #[error("Script ran but produced unexpected output: {reason}")]
    MalformedOutput { reason: String },
}

fn stderr_suffix(stderr: &str) -> String {
    let stderr = stderr.trim();
    if stderr.is_empty() {
        String::new()
    } else {
        format!("\n{}", stderr)
    }
}

/// Coarse error category, stable for machine-readable output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    NoWorkspaceOpen,
    Input,
    SubprocessFailure,
    MalformedOutput,
}

impl RagQueryError {
    pub fn kind(&self) -> FailureKind {
        match self {
            RagQueryError::NoWorkspaceOpen => FailureKind::NoWorkspaceOpen,
            RagQueryError::Input(_) => FailureKind::Input,
            RagQueryError::SubprocessFailure { .. } => FailureKind::SubprocessFailure,
            RagQueryError::MalformedOutput { .. } => FailureKind::MalformedOutput,
        }
    }
}

/// Input for the [`RunRagQueryUseCase`].
#[derive(Debug, Clone)]
pub struct RunRagQueryInput {
    /// Source pre-bound by the trigger; `None` shows the selection menu
    pub preset: Option<KnowledgeSource>,
    /// Question supplied up front; `None` prompts for it
    pub question: Option<String>,
    /// Workspace root used to expand path templates
    pub workspace_root: Option<PathBuf>,
    pub settings: Settings,
}

impl RunRagQueryInput {
    pub fn new(settings: Settings) -> Self {
        Self {
            preset: None,
            question: None,
            workspace_root: None,
            settings,
        }
    }

    pub fn with_preset(mut self, preset: Option<KnowledgeSource>) -> Self {
        self.preset = preset;
        self
    }

    pub fn with_question(mut self, question: Option<String>) -> Self {
        self.question = question;
        self
    }

    pub fn with_workspace_root(mut self, root: Option<PathBuf>) -> Self {
        self.workspace_root = root;
        self
    }
}

/// Successful result of [`RunRagQueryUseCase::execute`]
#[derive(Debug, Clone, Serialize)]
pub struct QueryDelivery {
    pub request: QueryRequest,
    pub prompt: ExtractedPrompt,
    pub report: DeliveryReport,
}

/// Final outcome of a query, after errors were reported
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QueryOutcome {
    Cancelled,
    Delivered(QueryDelivery),
    Failed { kind: FailureKind, message: String },
}

impl QueryOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, QueryOutcome::Failed { .. })
    }
}

/// Use case for running one query from input to delivery.
#[derive(Clone)]
pub struct RunRagQueryUseCase {
    collector: CollectInputUseCase,
    runner: Arc<dyn ScriptRunnerPort>,
    dispatcher: DispatchResultUseCase,
    notifier: Arc<dyn NotifierPort>,
}

impl RunRagQueryUseCase {
    pub fn new(
        collector: CollectInputUseCase,
        runner: Arc<dyn ScriptRunnerPort>,
        dispatcher: DispatchResultUseCase,
        notifier: Arc<dyn NotifierPort>,
    ) -> Self {
        Self {
            collector,
            runner,
            dispatcher,
            notifier,
        }
    }

    /// Run the flow and report any error to the user.
    ///
    /// Never returns an error: failures become [`QueryOutcome::Failed`]
    /// after an error notification.
    pub async fn run(
        &self,
        input: RunRagQueryInput,
        progress: &dyn ProgressNotifier,
    ) -> QueryOutcome {
        match self.execute(input, progress).await {
            Ok(Some(delivery)) => QueryOutcome::Delivered(delivery),
            Ok(None) => QueryOutcome::Cancelled,
            Err(e) => {
                error!("RAG Query error: {}", e);
                let message = e.to_string();
                self.notifier
                    .error(&format!("RAG Query failed: {}", message));
                QueryOutcome::Failed {
                    kind: e.kind(),
                    message,
                }
            }
        }
    }

    /// Run the flow.
    ///
    /// Returns `Ok(None)` when the user cancelled before the script started.
    pub async fn execute(
        &self,
        input: RunRagQueryInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<Option<QueryDelivery>, RagQueryError> {
        let workspace_root = input
            .workspace_root
            .as_deref()
            .ok_or(RagQueryError::NoWorkspaceOpen)?;
        let script_dir = input.settings.resolve_script_directory(workspace_root);

        let Some(request) = self.collector.execute(input.preset, input.question).await? else {
            return Ok(None);
        };

        info!(
            "Querying {} documentation: {}",
            request.source(),
            request.question()
        );
        progress.on_query_start(request.source());
        progress.on_stage(ProgressStage::LoadingDatabase);

        let invocation = ScriptInvocation::for_request(
            &request,
            input.settings.interpreter_path.as_str(),
            input.settings.script_name.as_str(),
            script_dir,
            input.settings.max_output_bytes,
        );
        debug!("Running: {}", invocation.command_line());

        progress.on_stage(ProgressStage::GeneratingPrompt);
        let prompt = match self.invoke_and_extract(&invocation).await {
            Ok(prompt) => prompt,
            Err(e) => {
                progress.on_query_complete(false);
                return Err(e);
            }
        };

        let report = self
            .dispatcher
            .execute(&prompt, &input.settings, progress)
            .await;
        progress.on_query_complete(true);

        Ok(Some(QueryDelivery {
            request,
            prompt,
            report,
        }))
    }

    async fn invoke_and_extract(
        &self,
        invocation: &ScriptInvocation,
    ) -> Result<ExtractedPrompt, RagQueryError> {
        let result = self
            .runner
            .run(invocation)
            .await
            .map_err(|e| RagQueryError::SubprocessFailure {
                message: e.to_string(),
                stderr: String::new(),
            })?;

        if !result.is_success() {
            return Err(RagQueryError::SubprocessFailure {
                message: format!("script exited with {}", result.exit_status),
                stderr: result.raw_error,
            });
        }

        extract_prompt(&result.raw_output).map_err(|e| match e {
            DomainError::MalformedOutput(reason) => RagQueryError::MalformedOutput { reason },
            other => RagQueryError::MalformedOutput {
                reason: other.to_string(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use crate::ports::script_runner::RunnerError;
    use crate::use_cases::dispatch_result::DeliverySinks;
    use crate::use_cases::test_support::{
        MockChat, MockClipboard, MockInput, MockNotifier, MockRunner, MockSurface,
        RecordingProgress, fenced,
    };
    use rag_copilot_domain::{ExitStatus, FollowUpAction, InvocationResult};

    struct Harness {
        input: Arc<MockInput>,
        runner: Arc<MockRunner>,
        clipboard: Arc<MockClipboard>,
        surface: Arc<MockSurface>,
        chat: Arc<MockChat>,
        notifier: Arc<MockNotifier>,
        use_case: RunRagQueryUseCase,
    }

    fn harness(input: MockInput, runner: MockRunner, notifier: MockNotifier) -> Harness {
        let input = Arc::new(input);
        let runner = Arc::new(runner);
        let clipboard = Arc::new(MockClipboard::new());
        let surface = Arc::new(MockSurface::new());
        let chat = Arc::new(MockChat::new());
        let notifier = Arc::new(notifier);

        let dispatcher = DispatchResultUseCase::new(
            DeliverySinks {
                clipboard: clipboard.clone(),
                surface: surface.clone(),
                chat: chat.clone(),
            },
            notifier.clone(),
        );
        let use_case = RunRagQueryUseCase::new(
            CollectInputUseCase::new(input.clone()),
            runner.clone(),
            dispatcher,
            notifier.clone(),
        );

        Harness {
            input,
            runner,
            clipboard,
            surface,
            chat,
            notifier,
            use_case,
        }
    }

    fn query_input(preset: Option<KnowledgeSource>) -> RunRagQueryInput {
        RunRagQueryInput::new(Settings::default())
            .with_preset(preset)
            .with_workspace_root(Some(PathBuf::from("/work/shop")))
    }

    #[tokio::test]
    async fn test_datatable_scenario() {
        let output = format!(
            "...\n{}",
            fenced("Use <DataTable :value=\"items\">...")
        ) + "...";
        let h = harness(
            MockInput::new(vec![Some("How to use DataTable in PrimeVue?")], vec![]),
            MockRunner::returning(InvocationResult::new(output, "", ExitStatus::Success)),
            MockNotifier::answering(Some(FollowUpAction::CopyAgain)),
        );

        let delivery = h
            .use_case
            .execute(query_input(Some(KnowledgeSource::PrimeVue)), &NoProgress)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(delivery.prompt.text(), "Use <DataTable :value=\"items\">...");

        let calls = h.runner.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0].argv(),
            vec![
                "quick_query.py",
                "How to use DataTable in PrimeVue?",
                "--db",
                "primevue"
            ]
        );
        assert_eq!(calls[0].program(), "python3");
        assert_eq!(calls[0].working_dir(), std::path::Path::new("/work/shop/RAG"));
        assert_eq!(calls[0].max_output_bytes(), 10 * 1024 * 1024);
        assert_eq!(h.clipboard.writes().len(), 2);
    }

    #[tokio::test]
    async fn test_subprocess_failure_scenario() {
        let h = harness(
            MockInput::new(vec![Some("What is useFetch?")], vec![]),
            MockRunner::returning(InvocationResult::new(
                "",
                "Traceback: db not found",
                ExitStatus::Failure { code: Some(1) },
            )),
            MockNotifier::answering(None),
        );

        let err = h
            .use_case
            .execute(query_input(Some(KnowledgeSource::Nuxt)), &NoProgress)
            .await
            .unwrap_err();

        match &err {
            RagQueryError::SubprocessFailure { stderr, .. } => {
                assert_eq!(stderr, "Traceback: db not found");
            }
            other => panic!("expected SubprocessFailure, got {:?}", other),
        }
        assert!(err.to_string().contains("Traceback: db not found"));
        assert!(h.clipboard.writes().is_empty());
        assert!(h.surface.opened().is_empty());
    }

    #[tokio::test]
    async fn test_auto_copy_off_default_chat_scenario() {
        let h = harness(
            MockInput::new(vec![Some("Dark mode?")], vec![Some(KnowledgeSource::Both)]),
            MockRunner::returning(InvocationResult::new(
                fenced("the prompt"),
                "📖 loading...",
                ExitStatus::Success,
            )),
            MockNotifier::answering(None),
        );
        let mut input = query_input(None);
        input.settings.auto_copy_clipboard = false;
        input.settings.auto_open_chat = true;

        let delivery = h.use_case.execute(input, &NoProgress).await.unwrap().unwrap();

        assert!(h.clipboard.writes().is_empty());
        assert_eq!(h.surface.opened(), vec!["the prompt".to_string()]);
        assert_eq!(h.notifier.offered_messages().len(), 1);
        assert_eq!(h.chat.open_count(), 1);
        assert_eq!(delivery.report.follow_up, Some(FollowUpAction::OpenChat));
        assert!(delivery.report.follow_up_defaulted);
    }

    #[tokio::test]
    async fn test_cancel_at_question_runs_nothing() {
        let h = harness(
            MockInput::new(vec![None], vec![]),
            MockRunner::returning(InvocationResult::new("", "", ExitStatus::Success)),
            MockNotifier::answering(None),
        );

        let outcome = h.use_case.run(query_input(None), &NoProgress).await;

        assert!(matches!(outcome, QueryOutcome::Cancelled));
        assert!(h.runner.calls().is_empty());
        assert!(h.notifier.errors().is_empty());
    }

    #[tokio::test]
    async fn test_cancel_at_source_menu_runs_nothing() {
        let h = harness(
            MockInput::new(vec![Some("Routing?")], vec![None]),
            MockRunner::returning(InvocationResult::new("", "", ExitStatus::Success)),
            MockNotifier::answering(None),
        );

        let outcome = h.use_case.run(query_input(None), &NoProgress).await;

        assert!(matches!(outcome, QueryOutcome::Cancelled));
        assert!(h.runner.calls().is_empty());
        assert!(h.notifier.errors().is_empty());
        assert_eq!(h.input.menu_calls(), 1);
    }

    #[tokio::test]
    async fn test_no_workspace_is_reported_before_prompting() {
        let h = harness(
            MockInput::new(vec![Some("unused")], vec![]),
            MockRunner::returning(InvocationResult::new("", "", ExitStatus::Success)),
            MockNotifier::answering(None),
        );

        let outcome = h
            .use_case
            .run(RunRagQueryInput::new(Settings::default()), &NoProgress)
            .await;

        match outcome {
            QueryOutcome::Failed { kind, .. } => assert_eq!(kind, FailureKind::NoWorkspaceOpen),
            other => panic!("expected failure, got {:?}", other),
        }
        assert_eq!(h.input.question_calls(), 0);
        assert!(h.runner.calls().is_empty());
        assert_eq!(
            h.notifier.errors(),
            vec!["RAG Query failed: No workspace folder open!".to_string()]
        );
    }

    #[tokio::test]
    async fn test_malformed_output_is_distinct() {
        let h = harness(
            MockInput::new(vec![Some("Icons?")], vec![]),
            MockRunner::returning(InvocationResult::new(
                format!("{}\nhalf a prompt\n", "=".repeat(80)),
                "",
                ExitStatus::Success,
            )),
            MockNotifier::answering(None),
        );

        let outcome = h
            .use_case
            .run(query_input(Some(KnowledgeSource::PrimeVue)), &NoProgress)
            .await;

        match outcome {
            QueryOutcome::Failed { kind, .. } => assert_eq!(kind, FailureKind::MalformedOutput),
            other => panic!("expected failure, got {:?}", other),
        }
        assert!(h.clipboard.writes().is_empty());
        assert_eq!(h.notifier.errors().len(), 1);
    }

    #[tokio::test]
    async fn test_runner_error_becomes_subprocess_failure() {
        let h = harness(
            MockInput::new(vec![Some("Icons?")], vec![]),
            MockRunner::failing(RunnerError::OutputLimitExceeded { limit: 16 }),
            MockNotifier::answering(None),
        );

        let err = h
            .use_case
            .execute(query_input(Some(KnowledgeSource::Both)), &NoProgress)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), FailureKind::SubprocessFailure);
        assert!(err.to_string().contains("16 byte buffer"));
    }

    #[tokio::test]
    async fn test_progress_stages_in_order() {
        let h = harness(
            MockInput::new(vec![Some("Pinia?")], vec![]),
            MockRunner::returning(InvocationResult::new(fenced("p"), "", ExitStatus::Success)),
            MockNotifier::answering(None),
        );
        let progress = RecordingProgress::default();

        h.use_case
            .execute(query_input(Some(KnowledgeSource::Nuxt)), &progress)
            .await
            .unwrap();

        assert_eq!(progress.stages(), ProgressStage::ALL.to_vec());
        assert_eq!(progress.completions(), vec![true]);
    }

    #[test]
    fn test_outcome_json_shape() {
        let cancelled = serde_json::to_value(QueryOutcome::Cancelled).unwrap();
        assert_eq!(cancelled["status"], "cancelled");

        let failed = serde_json::to_value(QueryOutcome::Failed {
            kind: FailureKind::MalformedOutput,
            message: "no delimiter line found".to_string(),
        })
        .unwrap();
        assert_eq!(failed["status"], "failed");
        assert_eq!(failed["kind"], "malformed_output");
    }
}
