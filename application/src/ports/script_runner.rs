//! Script runner port
//!
//! Runs the external RAG script described by a [`ScriptInvocation`] and
//! returns its captured output once the process exits.

use async_trait::async_trait;
use rag_copilot_domain::{InvocationResult, ScriptInvocation};
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised before a result could be captured.
///
/// A process that starts and exits non-zero is *not* a runner error: it is
/// reported as an [`InvocationResult`] with a failed exit status.
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Script directory not found: {}", .0.display())]
    WorkingDirNotFound(PathBuf),

    #[error("Failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Script output exceeded the {limit} byte buffer")]
    OutputLimitExceeded { limit: usize },

    #[error("I/O error while reading script output: {0}")]
    Io(#[from] std::io::Error),
}

/// Port for running the external script.
///
/// Implementations must not block the async runtime while the process runs.
#[async_trait]
pub trait ScriptRunnerPort: Send + Sync {
    async fn run(&self, invocation: &ScriptInvocation) -> Result<InvocationResult, RunnerError>;
}
