//! Workspace root discovery
//!
//! The workspace root replaces `${workspaceFolder}` in path templates. It is
//! either given explicitly or found by walking up from the current directory
//! to the first directory holding a workspace marker.

use std::path::{Path, PathBuf};
use tracing::debug;

/// Entries that mark a directory as a workspace root
const WORKSPACE_MARKERS: [&str; 4] = [".git", "rag-copilot.toml", ".rag-copilot.toml", ".vscode"];

/// Finds the workspace root for an invocation.
pub struct WorkspaceLocator;

impl WorkspaceLocator {
    /// Resolve the workspace root.
    ///
    /// An explicit directory wins when it exists. Otherwise the nearest
    /// ancestor of `start` (inclusive) containing a marker is used. `None`
    /// means no workspace is open.
    pub fn locate(explicit: Option<&Path>, start: &Path) -> Option<PathBuf> {
        if let Some(dir) = explicit {
            return dir.is_dir().then(|| dir.to_path_buf());
        }

        let found = start
            .ancestors()
            .find(|dir| WORKSPACE_MARKERS.iter().any(|m| dir.join(m).exists()))
            .map(Path::to_path_buf);
        debug!("Workspace root from {}: {:?}", start.display(), found);
        found
    }
}
