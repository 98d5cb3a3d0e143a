//! Text surface port
//!
//! A text surface is a new, editable document shown next to whatever the
//! user is looking at. It never replaces the current view.

use super::sink::SinkError;
use async_trait::async_trait;

/// Port for opening a new text surface.
#[async_trait]
pub trait TextSurfacePort: Send + Sync {
    /// Open a surface pre-filled with `content` and return where it lives
    /// (a path or other locator the user can recognize).
    async fn open_beside(&self, content: &str, language: &str) -> Result<String, SinkError>;
}
