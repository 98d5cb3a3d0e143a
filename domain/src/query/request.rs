//! Query request aggregate

use super::source::KnowledgeSource;
use crate::core::question::Question;
use serde::{Deserialize, Serialize};

/// A fully collected request: what to ask and where to look.
///
/// Built once per invocation from user input and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    question: Question,
    source: KnowledgeSource,
}

impl QueryRequest {
    pub fn new(question: Question, source: KnowledgeSource) -> Self {
        Self { question, source }
    }

    pub fn question(&self) -> &Question {
        &self.question
    }

    pub fn source(&self) -> KnowledgeSource {
        self.source
    }
}
