//! Terminal implementation of the input port.
//!
//! The question is read with a line editor when stdin is a terminal and
//! as a plain line otherwise. The source menu looks like:
//!
//! ```text
//! Select knowledge source:
//!   1. 📘 Both (Nuxt + PrimeVue)
//!   2. 🎨 PrimeVue Only
//!   3. ⚡ Nuxt Only
//! source>
//! ```
//!
//! Ctrl-C, Ctrl-D, end of input and an empty answer all cancel.

use async_trait::async_trait;
use colored::Colorize;
use rag_copilot_application::{InputError, InputPort, QuestionPrompt};
use rag_copilot_domain::KnowledgeSource;
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use std::io::{self, BufRead, IsTerminal, Write};

/// Result of interpreting one answer to the source menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAnswer {
    Selected(KnowledgeSource),
    Cancelled,
    Invalid,
}

/// Interpret a menu answer: a 1-based index, a source name, or empty/`q` to cancel.
pub fn parse_menu_answer(input: &str, options: &[KnowledgeSource]) -> MenuAnswer {
    let input = input.trim();
    if input.is_empty() || input.eq_ignore_ascii_case("q") {
        return MenuAnswer::Cancelled;
    }

    if let Ok(index) = input.parse::<usize>() {
        return match index.checked_sub(1).and_then(|i| options.get(i)) {
            Some(source) => MenuAnswer::Selected(*source),
            None => MenuAnswer::Invalid,
        };
    }

    match input.parse::<KnowledgeSource>() {
        Ok(source) if options.contains(&source) => MenuAnswer::Selected(source),
        _ => MenuAnswer::Invalid,
    }
}

/// Input adapter reading from the controlling terminal
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

fn read_line(label: &str) -> Result<Option<String>, InputError> {
    if io::stdin().is_terminal() {
        let mut editor = Reedline::create();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic(label.to_string()),
            DefaultPromptSegment::Empty,
        );
        return match editor.read_line(&prompt) {
            Ok(Signal::Success(line)) => Ok(Some(line)),
            Ok(_) => Ok(None),
            Err(e) => Err(InputError::Io(e.to_string())),
        };
    }

    eprint!("{}> ", label);
    io::stderr().flush().ok();
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) => Ok(None),
        Ok(_) => Ok(Some(line.trim_end_matches(['\r', '\n']).to_string())),
        Err(e) => Err(InputError::Io(e.to_string())),
    }
}

fn ask_question_blocking(prompt: QuestionPrompt) -> Result<Option<String>, InputError> {
    eprintln!("{}", prompt.prompt.bold());
    eprintln!("{}", prompt.placeholder.dimmed());
    read_line("question")
}

fn choose_source_blocking(
    options: Vec<KnowledgeSource>,
) -> Result<Option<KnowledgeSource>, InputError> {
    if options.is_empty() {
        return Err(InputError::Unavailable("no sources to choose from".into()));
    }

    eprintln!("{}", "Select knowledge source:".bold());
    for (i, source) in options.iter().enumerate() {
        eprintln!("  {}. {}", i + 1, source.label());
    }

    loop {
        let Some(line) = read_line("source")? else {
            return Ok(None);
        };
        match parse_menu_answer(&line, &options) {
            MenuAnswer::Selected(source) => return Ok(Some(source)),
            MenuAnswer::Cancelled => return Ok(None),
            MenuAnswer::Invalid => {
                eprintln!(
                    "{} Enter 1-{} or a source name (empty to cancel)",
                    "?".yellow(),
                    options.len()
                );
            }
        }
    }
}

#[async_trait]
impl InputPort for TerminalInput {
    async fn ask_question(&self, prompt: &QuestionPrompt) -> Result<Option<String>, InputError> {
        let prompt = *prompt;
        tokio::task::spawn_blocking(move || ask_question_blocking(prompt))
            .await
            .map_err(|e| InputError::Io(e.to_string()))?
    }

    async fn choose_source(
        &self,
        options: &[KnowledgeSource],
    ) -> Result<Option<KnowledgeSource>, InputError> {
        let options = options.to_vec();
        tokio::task::spawn_blocking(move || choose_source_blocking(options))
            .await
            .map_err(|e| InputError::Io(e.to_string()))?
    }
}
