//! Result delivery policy: follow-up actions and progress stages.

pub mod follow_up;
pub mod progress;
