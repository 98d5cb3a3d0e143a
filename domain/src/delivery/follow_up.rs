//! Follow-up actions offered by the completion notification

use serde::{Deserialize, Serialize};

/// Action the user can pick from the completion notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FollowUpAction {
    /// Open the external chat surface
    OpenChat,
    /// Copy the prompt to the clipboard again
    CopyAgain,
}

impl FollowUpAction {
    /// Actions in the order they are offered
    pub const ALL: [FollowUpAction; 2] = [FollowUpAction::OpenChat, FollowUpAction::CopyAgain];

    pub fn label(&self) -> &'static str {
        match self {
            FollowUpAction::OpenChat => "Open Copilot Chat",
            FollowUpAction::CopyAgain => "Copy Again",
        }
    }
}

impl std::fmt::Display for FollowUpAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Decide which follow-up runs given the user's selection.
///
/// An explicit selection always wins. With no selection, `OpenChat` is taken
/// only when `auto_open_chat` is set; there is no default for `CopyAgain`.
pub fn resolve_follow_up(
    selection: Option<FollowUpAction>,
    auto_open_chat: bool,
) -> Option<FollowUpAction> {
    match selection {
        Some(action) => Some(action),
        None if auto_open_chat => Some(FollowUpAction::OpenChat),
        None => None,
    }
}

/// Text of the completion notification
pub fn completion_message(copied_to_clipboard: bool) -> &'static str {
    if copied_to_clipboard {
        "Prompt generated and copied to clipboard!"
    } else {
        "Prompt generated!"
    }
}
