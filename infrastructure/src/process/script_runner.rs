//! External script runner
//!
//! Spawns `<interpreter> <script> <args..>` inside the script directory and
//! captures stdout and stderr concurrently. Both streams draw from one byte
//! budget (`max_output_bytes`); crossing it kills the process and fails the
//! run. The process is awaited, never polled.

use async_trait::async_trait;
use rag_copilot_application::ports::script_runner::{RunnerError, ScriptRunnerPort};
use rag_copilot_domain::{ExitStatus, InvocationResult, ScriptInvocation};
use std::process::Stdio;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tracing::{debug, info, warn};

const READ_CHUNK: usize = 8 * 1024;

/// [`ScriptRunnerPort`] backed by `tokio::process`.
#[derive(Debug, Clone, Default)]
pub struct TokioScriptRunner;

impl TokioScriptRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ScriptRunnerPort for TokioScriptRunner {
    async fn run(&self, invocation: &ScriptInvocation) -> Result<InvocationResult, RunnerError> {
        let working_dir = invocation.working_dir();
        if !working_dir.is_dir() {
            return Err(RunnerError::WorkingDirNotFound(working_dir.to_path_buf()));
        }

        debug!("Spawning: {}", invocation.command_line());

        let mut cmd = Command::new(invocation.program());
        cmd.arg(invocation.script())
            .args(invocation.args())
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        // Linux: request kernel to send SIGTERM to child when parent dies.
        #[cfg(target_os = "linux")]
        unsafe {
            cmd.pre_exec(|| {
                libc::prctl(libc::PR_SET_PDEATHSIG, libc::SIGTERM);
                Ok(())
            });
        }

        let mut child = cmd.spawn().map_err(|source| RunnerError::Spawn {
            program: invocation.program().to_string(),
            source,
        })?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| RunnerError::Io(std::io::Error::other("stdout was not captured")))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| RunnerError::Io(std::io::Error::other("stderr was not captured")))?;

        let limit = invocation.max_output_bytes();
        let used = AtomicUsize::new(0);
        let captured = tokio::try_join!(
            read_capped(stdout, &used, limit),
            read_capped(stderr, &used, limit)
        );

        let (out, err) = match captured {
            Ok(streams) => streams,
            Err(e) => {
                warn!("Stopping script: {}", e);
                if let Err(kill_err) = child.kill().await {
                    debug!("Failed to kill script process: {}", kill_err);
                }
                return Err(e);
            }
        };

        let status = child.wait().await?;
        let exit_status = ExitStatus::from_code(status.code());
        info!(
            "Script finished with {} ({} bytes stdout, {} bytes stderr)",
            exit_status,
            out.len(),
            err.len()
        );

        Ok(InvocationResult::new(
            String::from_utf8_lossy(&out).into_owned(),
            String::from_utf8_lossy(&err).into_owned(),
            exit_status,
        ))
    }
}

/// Read `reader` to the end, charging every byte to the shared `used` budget.
async fn read_capped<R>(mut reader: R, used: &AtomicUsize, limit: usize) -> Result<Vec<u8>, RunnerError>
where
    R: AsyncRead + Unpin,
{
    let mut buf = Vec::new();
    let mut chunk = vec![0u8; READ_CHUNK];
    loop {
        let n = reader.read(&mut chunk).await?;
        if n == 0 {
            return Ok(buf);
        }
        if used.fetch_add(n, Ordering::Relaxed) + n > limit {
            return Err(RunnerError::OutputLimitExceeded { limit });
        }
        buf.extend_from_slice(&chunk[..n]);
    }
}
