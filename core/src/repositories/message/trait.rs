//! Inbox queries over messages joined with the listing they concern.

use async_trait::async_trait;

use crate::domain::entities::Message;
use crate::errors::DomainError;

#[async_trait]
pub trait InboxRepository: Send + Sync {
    /// Messages received by `host_id` about listings the host owns,
    /// optionally narrowed to a single sender, in id order
    async fn inbox(
        &self,
        host_id: i64,
        sender_id: Option<i64>,
    ) -> Result<Vec<Message>, DomainError>;
}
