//! Configuration file loading for rag-copilot
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `RAG_COPILOT_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./rag-copilot.toml` or `./.rag-copilot.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/rag-copilot/config.toml`
//! 5. Default values
//!
//! The tool only reads configuration; it never writes it back.

mod file_config;
mod loader;

pub use file_config::{
    ChatTarget, ConfigValidationError, DEFAULT_CHAT_URL, FileConfig, FileDeliveryConfig, FileOutputConfig,
    FileRagConfig, FileSurfaceConfig,
};
pub use loader::ConfigLoader;
