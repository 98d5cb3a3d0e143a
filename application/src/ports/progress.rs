//! Progress notification port
//!
//! Defines the interface for reporting progress while a query runs.
//! Stages are advisory only; there is no cancel action.

use rag_copilot_domain::{KnowledgeSource, ProgressStage};

/// Callback for progress updates during a query
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bar, plain lines, nothing).
pub trait ProgressNotifier: Send + Sync {
    /// Called once the request is collected and the script is about to run
    fn on_query_start(&self, source: KnowledgeSource);

    /// Called when a stage is reached
    fn on_stage(&self, stage: ProgressStage);

    /// Called when the query finishes, successfully or not
    fn on_query_complete(&self, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_query_start(&self, _source: KnowledgeSource) {}
    fn on_stage(&self, _stage: ProgressStage) {}
    fn on_query_complete(&self, _success: bool) {}
}
