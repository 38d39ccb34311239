//! In-memory implementation of InboxRepository

use async_trait::async_trait;

use crate::domain::entities::{Item, Message};
use crate::errors::DomainError;
use crate::repositories::record::InMemoryRepository;

use super::trait_::InboxRepository;

#[derive(Clone, Default)]
pub struct InMemoryInboxRepository {
    messages: InMemoryRepository<Message>,
    items: InMemoryRepository<Item>,
}

impl InMemoryInboxRepository {
    pub fn new(messages: InMemoryRepository<Message>, items: InMemoryRepository<Item>) -> Self {
        Self { messages, items }
    }
}

#[async_trait]
impl InboxRepository for InMemoryInboxRepository {
    async fn inbox(
        &self,
        host_id: i64,
        sender_id: Option<i64>,
    ) -> Result<Vec<Message>, DomainError> {
        let items = self.items.snapshot().await;
        let owns = |item_id: i64| {
            items
                .iter()
                .any(|i| i.item_id == item_id && i.owner_id == host_id)
        };

        Ok(self
            .messages
            .snapshot()
            .await
            .into_iter()
            .filter(|m| m.receiver_id == host_id && owns(m.item_id))
            .filter(|m| sender_id.map_or(true, |s| m.sender_id == s))
            .collect())
    }
}
