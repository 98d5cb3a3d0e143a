//! Query request values: the question and the knowledge source to search.

pub mod request;
pub mod source;
