//! Prompt extraction from the external script's output.

pub mod extraction;
