//! Text surface backed by a prompt file.
//!
//! Each prompt lands in a new file under the surface directory, named after
//! the time it was generated, so earlier prompts are never overwritten. When
//! a viewer command is configured it is started in the background with the
//! file path as its last argument, leaving the terminal where it was.

use crate::process::command::spawn_detached;
use async_trait::async_trait;
use chrono::Local;
use rag_copilot_application::ports::sink::SinkError;
use rag_copilot_application::ports::text_surface::TextSurfacePort;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::debug;

const MAX_NAME_ATTEMPTS: usize = 1000;

/// [`TextSurfacePort`] that writes prompt files.
#[derive(Debug, Clone)]
pub struct FileTextSurface {
    directory: PathBuf,
    open_command: Option<Vec<String>>,
}

impl FileTextSurface {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            open_command: None,
        }
    }

    /// Start `command <file>` after writing each prompt.
    pub fn with_open_command(mut self, command: Option<Vec<String>>) -> Self {
        self.open_command = command;
        self
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn extension(language: &str) -> &'static str {
        match language {
            "markdown" | "md" => "md",
            _ => "txt",
        }
    }

    /// Create a fresh file, adding a counter if the timestamped name is taken.
    async fn create_file(&self, stem: &str, ext: &str) -> Result<(PathBuf, fs::File), SinkError> {
        for n in 0..MAX_NAME_ATTEMPTS {
            let name = if n == 0 {
                format!("{}.{}", stem, ext)
            } else {
                format!("{}-{}.{}", stem, n, ext)
            };
            let path = self.directory.join(name);
            match OpenOptions::new().write(true).create_new(true).open(&path).await {
                Ok(file) => return Ok((path, file)),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Err(SinkError::Io(format!(
            "no free file name for {} in {}",
            stem,
            self.directory.display()
        )))
    }
}

#[async_trait]
impl TextSurfacePort for FileTextSurface {
    async fn open_beside(&self, content: &str, language: &str) -> Result<String, SinkError> {
        fs::create_dir_all(&self.directory).await?;

        let stem = format!("prompt-{}", Local::now().format("%Y%m%d-%H%M%S"));
        let (path, mut file) = self.create_file(&stem, Self::extension(language)).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        debug!("Wrote prompt to {}", path.display());

        if let Some(command) = &self.open_command {
            let mut argv = command.clone();
            argv.push(path.to_string_lossy().into_owned());
            spawn_detached(&argv)?;
        }

        Ok(path.display().to_string())
    }
}
