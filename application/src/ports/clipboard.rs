//! Clipboard port

use super::sink::SinkError;
use async_trait::async_trait;

/// Port for writing text to the system clipboard.
#[async_trait]
pub trait ClipboardPort: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), SinkError>;
}
