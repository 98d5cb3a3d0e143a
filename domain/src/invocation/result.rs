//! Captured result of a finished script run

use serde::{Deserialize, Serialize};

/// How the script process ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExitStatus {
    Success,
    /// Non-zero exit. `code` is `None` when the process was killed by a signal.
    Failure { code: Option<i32> },
}

impl ExitStatus {
    pub fn from_code(code: Option<i32>) -> Self {
        match code {
            Some(0) => ExitStatus::Success,
            other => ExitStatus::Failure { code: other },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ExitStatus::Success)
    }
}

impl std::fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExitStatus::Success => write!(f, "exit code 0"),
            ExitStatus::Failure { code: Some(code) } => write!(f, "exit code {}", code),
            ExitStatus::Failure { code: None } => write!(f, "terminated by signal"),
        }
    }
}

/// Output of one script run. Consumed by prompt extraction and then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationResult {
    pub raw_output: String,
    pub raw_error: String,
    pub exit_status: ExitStatus,
}

impl InvocationResult {
    pub fn new(
        raw_output: impl Into<String>,
        raw_error: impl Into<String>,
        exit_status: ExitStatus,
    ) -> Self {
        Self {
            raw_output: raw_output.into(),
            raw_error: raw_error.into(),
            exit_status,
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_status.is_success()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_status_from_code() {
        assert_eq!(ExitStatus::from_code(Some(0)), ExitStatus::Success);
        assert_eq!(
            ExitStatus::from_code(Some(1)),
            ExitStatus::Failure { code: Some(1) }
        );
        assert_eq!(ExitStatus::from_code(None), ExitStatus::Failure { code: None });
    }

    #[test]
    fn test_exit_status_display() {
        assert_eq!(ExitStatus::Failure { code: Some(2) }.to_string(), "exit code 2");
        assert_eq!(ExitStatus::Failure { code: None }.to_string(), "terminated by signal");
    }
}
