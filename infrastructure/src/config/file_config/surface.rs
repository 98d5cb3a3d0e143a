//! Text surface configuration from TOML (`[surface]` section)

use rag_copilot_domain::WORKSPACE_PLACEHOLDER;
use serde::{Deserialize, Serialize};

/// Raw `[surface]` configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSurfaceConfig {
    /// Directory for prompt files; `${workspaceFolder}` expands to the workspace root
    pub directory: String,
    /// Viewer command; the prompt file path is appended as the last argument
    pub open_command: Option<Vec<String>>,
}

impl Default for FileSurfaceConfig {
    fn default() -> Self {
        Self {
            directory: format!("{}/.rag-copilot/prompts", WORKSPACE_PLACEHOLDER),
            open_command: None,
        }
    }
}
