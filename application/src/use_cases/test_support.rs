//! Hand-written port mocks shared by the use case tests.

use crate::ports::chat_launcher::ChatLauncherPort;
use crate::ports::clipboard::ClipboardPort;
use crate::ports::input::{InputError, InputPort, QuestionPrompt};
use crate::ports::notifier::NotifierPort;
use crate::ports::progress::ProgressNotifier;
use crate::ports::script_runner::{RunnerError, ScriptRunnerPort};
use crate::ports::sink::SinkError;
use crate::ports::text_surface::TextSurfacePort;
use async_trait::async_trait;
use rag_copilot_domain::{
    ExtractedPrompt, FollowUpAction, InvocationResult, KnowledgeSource, ProgressStage,
    ScriptInvocation, extract_prompt,
};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// Wrap `text` in delimiter lines the way the RAG script prints it.
pub fn fenced(text: &str) -> String {
    let fence = "=".repeat(80);
    format!("{}\n{}\n{}\n", fence, text, fence)
}

pub fn prompt_from(text: &str) -> ExtractedPrompt {
    extract_prompt(&fenced(text)).unwrap()
}

// ==================== Input ====================

pub struct MockInput {
    questions: Mutex<VecDeque<Option<String>>>,
    sources: Mutex<VecDeque<Option<KnowledgeSource>>>,
    failure: Option<InputError>,
    question_calls: Mutex<usize>,
    menu_options: Mutex<Vec<Vec<KnowledgeSource>>>,
}

impl MockInput {
    pub fn new(questions: Vec<Option<&str>>, sources: Vec<Option<KnowledgeSource>>) -> Self {
        Self {
            questions: Mutex::new(
                questions
                    .into_iter()
                    .map(|q| q.map(str::to_string))
                    .collect(),
            ),
            sources: Mutex::new(sources.into_iter().collect()),
            failure: None,
            question_calls: Mutex::new(0),
            menu_options: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(InputError::Io(message.to_string())),
            ..Self::new(vec![], vec![])
        }
    }

    pub fn question_calls(&self) -> usize {
        *self.question_calls.lock().unwrap()
    }

    pub fn menu_calls(&self) -> usize {
        self.menu_options.lock().unwrap().len()
    }

    pub fn last_menu_options(&self) -> Vec<KnowledgeSource> {
        self.menu_options
            .lock()
            .unwrap()
            .last()
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl InputPort for MockInput {
    async fn ask_question(&self, _prompt: &QuestionPrompt) -> Result<Option<String>, InputError> {
        *self.question_calls.lock().unwrap() += 1;
        if let Some(e) = &self.failure {
            return Err(e.clone());
        }
        Ok(self.questions.lock().unwrap().pop_front().flatten())
    }

    async fn choose_source(
        &self,
        options: &[KnowledgeSource],
    ) -> Result<Option<KnowledgeSource>, InputError> {
        self.menu_options.lock().unwrap().push(options.to_vec());
        if let Some(e) = &self.failure {
            return Err(e.clone());
        }
        Ok(self.sources.lock().unwrap().pop_front().flatten())
    }
}

// ==================== Script runner ====================

pub struct MockRunner {
    result: Mutex<Option<Result<InvocationResult, RunnerError>>>,
    calls: Mutex<Vec<ScriptInvocation>>,
}

impl MockRunner {
    pub fn returning(result: InvocationResult) -> Self {
        Self {
            result: Mutex::new(Some(Ok(result))),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: RunnerError) -> Self {
        Self {
            result: Mutex::new(Some(Err(error))),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<ScriptInvocation> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScriptRunnerPort for MockRunner {
    async fn run(&self, invocation: &ScriptInvocation) -> Result<InvocationResult, RunnerError> {
        self.calls.lock().unwrap().push(invocation.clone());
        self.result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(RunnerError::Io(std::io::Error::other("runner already used"))))
    }
}

// ==================== Sinks ====================

pub struct MockClipboard {
    writes: Mutex<Vec<String>>,
    fail: bool,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self {
            writes: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClipboardPort for MockClipboard {
    async fn write_text(&self, text: &str) -> Result<(), SinkError> {
        if self.fail {
            return Err(SinkError::Unavailable("clipboard".to_string()));
        }
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

pub struct MockSurface {
    opened: Mutex<Vec<String>>,
    fail: bool,
}

impl MockSurface {
    pub fn new() -> Self {
        Self {
            opened: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextSurfacePort for MockSurface {
    async fn open_beside(&self, content: &str, _language: &str) -> Result<String, SinkError> {
        if self.fail {
            return Err(SinkError::Io("read-only file system".to_string()));
        }
        let mut opened = self.opened.lock().unwrap();
        opened.push(content.to_string());
        Ok(format!("prompt-{}.md", opened.len()))
    }
}

pub struct MockChat {
    opens: Mutex<usize>,
}

impl MockChat {
    pub fn new() -> Self {
        Self {
            opens: Mutex::new(0),
        }
    }

    pub fn open_count(&self) -> usize {
        *self.opens.lock().unwrap()
    }
}

#[async_trait]
impl ChatLauncherPort for MockChat {
    async fn open_chat(&self) -> Result<(), SinkError> {
        *self.opens.lock().unwrap() += 1;
        Ok(())
    }
}

// ==================== Notifier ====================

pub struct MockNotifier {
    answer: Option<FollowUpAction>,
    infos: Mutex<Vec<String>>,
    warnings: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
    offered: Mutex<Vec<String>>,
}

impl MockNotifier {
    /// Notifier whose follow-up prompt returns `answer` (`None` = expired)
    pub fn answering(answer: Option<FollowUpAction>) -> Self {
        Self {
            answer,
            infos: Mutex::new(Vec::new()),
            warnings: Mutex::new(Vec::new()),
            errors: Mutex::new(Vec::new()),
            offered: Mutex::new(Vec::new()),
        }
    }

    pub fn infos(&self) -> Vec<String> {
        self.infos.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn offered_messages(&self) -> Vec<String> {
        self.offered.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotifierPort for MockNotifier {
    fn info(&self, message: &str) {
        self.infos.lock().unwrap().push(message.to_string());
    }

    fn warn(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    async fn offer_follow_up(
        &self,
        message: &str,
        _actions: &[FollowUpAction],
        _lifetime: Duration,
    ) -> Option<FollowUpAction> {
        self.offered.lock().unwrap().push(message.to_string());
        self.answer
    }
}

// ==================== Progress ====================

#[derive(Default)]
pub struct RecordingProgress {
    stages: Mutex<Vec<ProgressStage>>,
    completions: Mutex<Vec<bool>>,
}

impl RecordingProgress {
    pub fn stages(&self) -> Vec<ProgressStage> {
        self.stages.lock().unwrap().clone()
    }

    pub fn completions(&self) -> Vec<bool> {
        self.completions.lock().unwrap().clone()
    }
}

impl ProgressNotifier for RecordingProgress {
    fn on_query_start(&self, _source: KnowledgeSource) {}

    fn on_stage(&self, stage: ProgressStage) {
        self.stages.lock().unwrap().push(stage);
    }

    fn on_query_complete(&self, success: bool) {
        self.completions.lock().unwrap().push(success);
    }
}
