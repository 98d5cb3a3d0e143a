//! Run summary formatting

pub mod console;
