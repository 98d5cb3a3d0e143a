//! Use cases (application services)
//!
//! - [`collect_input`]: question and knowledge source from the user
//! - [`dispatch_result`]: clipboard, text surface and follow-up delivery
//! - [`run_rag_query`]: the full flow from input to delivery

pub mod collect_input;
pub mod dispatch_result;
pub mod run_rag_query;

#[cfg(test)]
pub(crate) mod test_support;
