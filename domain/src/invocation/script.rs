//! Command description for the external RAG script

use crate::query::request::QueryRequest;
use std::path::{Path, PathBuf};

/// Flag the script uses to select the knowledge source
pub const SOURCE_FLAG: &str = "--db";

/// A fully resolved invocation of the external script.
///
/// Arguments are kept as discrete values and handed to the OS one by one,
/// so the question never passes through a shell. [`command_line`](Self::command_line)
/// renders the equivalent shell command for logs and error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptInvocation {
    program: String,
    script: String,
    args: Vec<String>,
    working_dir: PathBuf,
    max_output_bytes: usize,
}

impl ScriptInvocation {
    /// Build the invocation `<program> <script> <question> --db <source>`
    /// running inside `working_dir`.
    pub fn for_request(
        request: &QueryRequest,
        program: impl Into<String>,
        script: impl Into<String>,
        working_dir: impl Into<PathBuf>,
        max_output_bytes: usize,
    ) -> Self {
        Self {
            program: program.into(),
            script: script.into(),
            args: vec![
                request.question().content().to_string(),
                SOURCE_FLAG.to_string(),
                request.source().as_str().to_string(),
            ],
            working_dir: working_dir.into(),
            max_output_bytes,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn script(&self) -> &str {
        &self.script
    }

    /// Arguments following the script path
    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Upper bound on combined stdout + stderr bytes
    pub fn max_output_bytes(&self) -> usize {
        self.max_output_bytes
    }

    /// Full argument vector passed to `program` (script first)
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.script.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }

    /// Render as a POSIX shell command line.
    ///
    /// Every argument except the enumerated source value is double-quoted
    /// with [`quote_arg`], so running the line through `sh -c` delivers the
    /// same literal strings as [`argv`](Self::argv).
    pub fn command_line(&self) -> String {
        let mut parts = vec![
            format!("cd {}", quote_arg(&self.working_dir.to_string_lossy())),
            "&&".to_string(),
            quote_arg(&self.program),
            quote_arg(&self.script),
        ];
        for arg in &self.args {
            if arg == SOURCE_FLAG || is_plain_word(arg) {
                parts.push(arg.clone());
            } else {
                parts.push(quote_arg(arg));
            }
        }
        parts.join(" ")
    }
}

/// Wrap `arg` in double quotes, escaping the characters that stay special
/// inside them (`"`, `\`, `$` and backtick).
pub fn quote_arg(arg: &str) -> String {
    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('"');
    for ch in arg.chars() {
        if matches!(ch, '"' | '\\' | '$' | '`') {
            quoted.push('\\');
        }
        quoted.push(ch);
    }
    quoted.push('"');
    quoted
}

fn is_plain_word(arg: &str) -> bool {
    !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/'))
}
