//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: a validated, non-empty question for the RAG script
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod question;
