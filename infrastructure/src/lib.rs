//! Infrastructure layer for rag-copilot
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod chat;
pub mod clipboard;
pub mod config;
pub mod process;
pub mod surface;
pub mod workspace;

// Re-export commonly used types
pub use chat::CommandChatLauncher;
pub use clipboard::SystemClipboard;
pub use config::{
    ChatTarget, ConfigLoader, ConfigValidationError, DEFAULT_CHAT_URL, FileConfig, FileDeliveryConfig,
    FileOutputConfig, FileRagConfig, FileSurfaceConfig,
};
pub use process::TokioScriptRunner;
pub use surface::FileTextSurface;
pub use workspace::WorkspaceLocator;
