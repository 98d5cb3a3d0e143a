//! User input port
//!
//! Collects the question and, when no trigger pre-binds it, the knowledge
//! source. Every method may suspend indefinitely waiting for the user.
//!
//! Cancellation is an answer, not a failure: adapters return `Ok(None)`
//! when the user dismisses a prompt, and reserve [`InputError`] for real
//! I/O problems such as a closed terminal.

use async_trait::async_trait;
use rag_copilot_domain::KnowledgeSource;
use thiserror::Error;

/// Error type for input collection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Input unavailable: {0}")]
    Unavailable(String),
}

/// Text shown when asking for the question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionPrompt {
    pub prompt: &'static str,
    pub placeholder: &'static str,
}

impl Default for QuestionPrompt {
    fn default() -> Self {
        Self {
            prompt: "What do you want to ask about Nuxt/PrimeVue?",
            placeholder: "e.g., How to use DataTable in PrimeVue?",
        }
    }
}

/// Port for collecting user input.
#[async_trait]
pub trait InputPort: Send + Sync {
    /// Ask for free text. `Ok(None)` means the user cancelled.
    async fn ask_question(&self, prompt: &QuestionPrompt) -> Result<Option<String>, InputError>;

    /// Single-choice menu over `options`. `Ok(None)` means the user cancelled.
    async fn choose_source(
        &self,
        options: &[KnowledgeSource],
    ) -> Result<Option<KnowledgeSource>, InputError>;
}
