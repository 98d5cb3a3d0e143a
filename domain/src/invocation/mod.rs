//! External script invocation: the command to run and what it produced.

pub mod result;
pub mod script;
