//! External script configuration from TOML (`[rag]` section)

use rag_copilot_domain::{DEFAULT_MAX_OUTPUT_BYTES, Settings};
use serde::{Deserialize, Serialize};

/// Raw `[rag]` configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRagConfig {
    /// Interpreter used to run the script
    pub python_path: String,
    /// Script directory; `${workspaceFolder}` expands to the workspace root
    pub rag_path: String,
    /// Script file inside `rag_path`
    pub script: String,
    /// Bound on combined stdout + stderr bytes
    pub max_output_bytes: usize,
}

impl Default for FileRagConfig {
    fn default() -> Self {
        let settings = Settings::default();
        Self {
            python_path: settings.interpreter_path,
            rag_path: settings.script_directory,
            script: settings.script_name,
            max_output_bytes: DEFAULT_MAX_OUTPUT_BYTES,
        }
    }
}
