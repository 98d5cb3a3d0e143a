//! Chat launcher port

use super::sink::SinkError;
use async_trait::async_trait;

/// Port for bringing up the external chat surface.
#[async_trait]
pub trait ChatLauncherPort: Send + Sync {
    async fn open_chat(&self) -> Result<(), SinkError>;
}
