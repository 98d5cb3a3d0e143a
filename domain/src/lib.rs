//! Domain layer for rag-copilot
//!
//! This crate contains the value objects and pure rules of a single
//! prompt-generation request. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Query
//!
//! A [`QueryRequest`] pairs a validated [`Question`] with one of the fixed
//! [`KnowledgeSource`]s the external RAG script can search.
//!
//! ## Output contract
//!
//! The external script prints the generated prompt between two delimiter lines
//! (80 × `=`). [`extract_prompt`] is the only way to obtain an
//! [`ExtractedPrompt`], so a prompt value always satisfies the contract.
//!
//! ## Delivery policy
//!
//! [`FollowUpAction`] and [`resolve_follow_up`] decide what happens after the
//! completion notification, including the default taken when the user does
//! not answer.

pub mod command;
pub mod config;
pub mod core;
pub mod delivery;
pub mod invocation;
pub mod prompt;
pub mod query;

// Re-export commonly used types
pub use command::trigger::TriggerId;
pub use config::{
    OutputFormat,
    settings::{DEFAULT_MAX_OUTPUT_BYTES, Settings, WORKSPACE_PLACEHOLDER, resolve_template},
};
pub use core::{error::DomainError, question::Question};
pub use delivery::{
    follow_up::{FollowUpAction, completion_message, resolve_follow_up},
    progress::ProgressStage,
};
pub use invocation::{
    result::{ExitStatus, InvocationResult},
    script::{ScriptInvocation, quote_arg},
};
pub use prompt::extraction::{DELIMITER_CHAR, DELIMITER_WIDTH, ExtractedPrompt, extract_prompt};
pub use query::{request::QueryRequest, source::KnowledgeSource};
