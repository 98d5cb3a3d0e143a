//! User notification port
//!
//! Informational and error messages are fire-and-forget. The follow-up
//! notification is the only one that waits for an answer, and only for its
//! own lifetime.

use async_trait::async_trait;
use rag_copilot_domain::FollowUpAction;
use std::time::Duration;

/// Port for user-visible notifications.
#[async_trait]
pub trait NotifierPort: Send + Sync {
    fn info(&self, message: &str);

    fn warn(&self, message: &str);

    fn error(&self, message: &str);

    /// Show `message` with `actions` and wait up to `lifetime` for a pick.
    ///
    /// Returns `None` when the notification expires or is dismissed.
    async fn offer_follow_up(
        &self,
        message: &str,
        actions: &[FollowUpAction],
        lifetime: Duration,
    ) -> Option<FollowUpAction>;
}
