//! Delimiter-based prompt extraction.
//!
//! The RAG script prints status chatter around the generated prompt and
//! fences the prompt itself with two identical lines:
//!
//! ```text
//! 🧠 Searching PrimeVue documentation...
//! ================================================================================
//! You are an expert coding assistant specialized in PrimeVue
//! ...
//! ================================================================================
//! ```
//!
//! Matching is strict: a delimiter is a line of exactly [`DELIMITER_WIDTH`]
//! copies of [`DELIMITER_CHAR`] and nothing else (a trailing `\r` is ignored).

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Character repeated on a delimiter line
pub const DELIMITER_CHAR: char = '=';

/// Number of characters on a delimiter line
pub const DELIMITER_WIDTH: usize = 80;

/// Prompt text recovered from the script output (Value Object)
///
/// Always non-empty and trimmed. Can only be built by [`extract_prompt`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedPrompt {
    text: String,
}

impl ExtractedPrompt {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl std::fmt::Display for ExtractedPrompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Check whether `line` is a delimiter line.
pub fn is_delimiter_line(line: &str) -> bool {
    let line = line.strip_suffix('\r').unwrap_or(line);
    line.len() == DELIMITER_WIDTH * DELIMITER_CHAR.len_utf8()
        && line.chars().all(|c| c == DELIMITER_CHAR)
}

/// Extract the text between the first two delimiter lines of `output`.
///
/// # Errors
///
/// [`DomainError::MalformedOutput`] when fewer than two delimiter lines are
/// present or the fenced region is blank. No partial result is ever returned.
pub fn extract_prompt(output: &str) -> Result<ExtractedPrompt, DomainError> {
    let mut lines = output.lines();

    if !lines.by_ref().any(is_delimiter_line) {
        return Err(DomainError::MalformedOutput(
            "no delimiter line found".to_string(),
        ));
    }

    let mut body = Vec::new();
    let mut closed = false;
    for line in lines {
        if is_delimiter_line(line) {
            closed = true;
            break;
        }
        body.push(line);
    }

    if !closed {
        return Err(DomainError::MalformedOutput(
            "only one delimiter line found".to_string(),
        ));
    }

    let text = body.join("\n").trim().to_string();
    if text.is_empty() {
        return Err(DomainError::MalformedOutput(
            "nothing between delimiter lines".to_string(),
        ));
    }

    Ok(ExtractedPrompt { text })
}
