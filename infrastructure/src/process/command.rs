//! Helper commands for delivery sinks (clipboard writers, openers, viewers).

use rag_copilot_application::ports::sink::SinkError;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

fn render_argv(argv: &[String]) -> String {
    argv.join(" ")
}

fn command_for(argv: &[String]) -> Result<Command, SinkError> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| SinkError::Unavailable("empty command".to_string()))?;
    let mut cmd = Command::new(program);
    cmd.args(args);
    Ok(cmd)
}

fn failed(argv: &[String], message: impl Into<String>) -> SinkError {
    SinkError::CommandFailed {
        command: render_argv(argv),
        message: message.into(),
    }
}

/// Run `argv`, feed `input` on stdin and wait for a zero exit.
pub async fn pipe_to_command(argv: &[String], input: &str) -> Result<(), SinkError> {
    debug!("Piping {} bytes to {}", input.len(), render_argv(argv));

    let mut child = command_for(argv)?
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| failed(argv, e.to_string()))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(input.as_bytes()).await?;
        stdin.shutdown().await?;
    }

    let output = child.wait_with_output().await?;
    if output.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(failed(
            argv,
            format!("exited with {}: {}", output.status, stderr.trim()),
        ))
    }
}

/// Run `argv` to completion and require a zero exit.
pub async fn run_command(argv: &[String]) -> Result<(), SinkError> {
    debug!("Running {}", render_argv(argv));

    let output = command_for(argv)?
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| failed(argv, e.to_string()))?;

    if output.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(failed(
            argv,
            format!("exited with {}: {}", output.status, stderr.trim()),
        ))
    }
}

/// Start `argv` without waiting for it; the process outlives the query.
pub fn spawn_detached(argv: &[String]) -> Result<(), SinkError> {
    debug!("Starting {}", render_argv(argv));

    command_for(argv)?
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|e| failed(argv, e.to_string()))
}
