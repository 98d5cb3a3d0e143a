//! Application layer for rag-copilot
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    chat_launcher::ChatLauncherPort,
    clipboard::ClipboardPort,
    input::{InputError, InputPort, QuestionPrompt},
    notifier::NotifierPort,
    progress::{NoProgress, ProgressNotifier},
    script_runner::{RunnerError, ScriptRunnerPort},
    sink::{SinkError, SinkKind},
    text_surface::TextSurfacePort,
};
pub use use_cases::collect_input::CollectInputUseCase;
pub use use_cases::dispatch_result::{
    DeliveryReport, DeliverySinks, DispatchResultUseCase, SinkFailure,
};
pub use use_cases::run_rag_query::{
    FailureKind, QueryDelivery, QueryOutcome, RagQueryError, RunRagQueryInput,
    RunRagQueryUseCase,
};
