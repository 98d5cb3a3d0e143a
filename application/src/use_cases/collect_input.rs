//! Collect Input use case.
//!
//! Builds a [`QueryRequest`] from user input. The question comes first; the
//! source menu is shown only when the trigger did not pre-bind a source.
//! Cancelling either prompt ends the flow without an error.

use crate::ports::input::{InputError, InputPort, QuestionPrompt};
use rag_copilot_domain::{KnowledgeSource, QueryRequest, Question};
use std::sync::Arc;
use tracing::debug;

/// Use case for collecting a [`QueryRequest`].
#[derive(Clone)]
pub struct CollectInputUseCase {
    input: Arc<dyn InputPort>,
    prompt: QuestionPrompt,
}

impl CollectInputUseCase {
    pub fn new(input: Arc<dyn InputPort>) -> Self {
        Self {
            input,
            prompt: QuestionPrompt::default(),
        }
    }

    /// Override the question prompt text.
    pub fn with_prompt(mut self, prompt: QuestionPrompt) -> Self {
        self.prompt = prompt;
        self
    }

    /// Collect the request.
    ///
    /// `question` skips the text prompt when already known (e.g. passed on
    /// the command line). Returns `Ok(None)` if the user cancelled, including
    /// a blank question.
    pub async fn execute(
        &self,
        preset: Option<KnowledgeSource>,
        question: Option<String>,
    ) -> Result<Option<QueryRequest>, InputError> {
        let text = match question {
            Some(text) => Some(text),
            None => self.input.ask_question(&self.prompt).await?,
        };

        let Some(question) = text.and_then(Question::try_new) else {
            debug!("Question prompt cancelled");
            return Ok(None);
        };

        let source = match preset {
            Some(source) => source,
            None => match self.input.choose_source(&KnowledgeSource::MENU_ORDER).await? {
                Some(source) => source,
                None => {
                    debug!("Source selection cancelled");
                    return Ok(None);
                }
            },
        };

        Ok(Some(QueryRequest::new(question, source)))
    }
}
