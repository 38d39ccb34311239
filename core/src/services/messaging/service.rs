//! Guest-to-host messaging

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Item, Message, NewMessage, User};
use crate::domain::Record;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{InboxRepository, ListingRepository, RecordRepository, UserRepository};

/// A message written by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMessage {
    pub receiver_id: i64,
    pub item_id: i64,
    pub text: String,
}

pub struct MessagingService {
    message_repository: Arc<dyn RecordRepository<Message>>,
    inbox_repository: Arc<dyn InboxRepository>,
    user_repository: Arc<dyn UserRepository>,
    listing_repository: Arc<dyn ListingRepository>,
}

impl MessagingService {
    pub fn new(
        message_repository: Arc<dyn RecordRepository<Message>>,
        inbox_repository: Arc<dyn InboxRepository>,
        user_repository: Arc<dyn UserRepository>,
        listing_repository: Arc<dyn ListingRepository>,
    ) -> Self {
        Self {
            message_repository,
            inbox_repository,
            user_repository,
            listing_repository,
        }
    }

    /// Stores a message from `sender` to the receiver about a listing
    pub async fn send(&self, sender: &User, message: SendMessage) -> DomainResult<Message> {
        let record = Message::from_new(NewMessage {
            sender_id: sender.user_id,
            receiver_id: message.receiver_id,
            item_id: message.item_id,
            text: message.text,
        });
        record.validate()?;

        if self
            .user_repository
            .find_by_id(record.receiver_id)
            .await?
            .is_none()
        {
            return Err(DomainError::not_found(User::RESOURCE));
        }
        if self
            .listing_repository
            .find_by_id(record.item_id)
            .await?
            .is_none()
        {
            return Err(DomainError::not_found(Item::RESOURCE));
        }

        let saved = self.message_repository.create(record).await?;
        tracing::info!(
            message_id = saved.message_id,
            sender_id = saved.sender_id,
            receiver_id = saved.receiver_id,
            event = "message_sent",
            "Stored message"
        );
        Ok(saved)
    }

    /// All messages the host received about their own listings
    pub async fn inbox(&self, host_id: i64, caller: &User) -> DomainResult<Vec<Message>> {
        self.ensure_host(host_id, caller)?;
        self.inbox_repository.inbox(host_id, None).await
    }

    /// Messages the host received from one sender
    pub async fn conversation(
        &self,
        host_id: i64,
        sender_id: i64,
        caller: &User,
    ) -> DomainResult<Vec<Message>> {
        self.ensure_host(host_id, caller)?;
        self.inbox_repository.inbox(host_id, Some(sender_id)).await
    }

    fn ensure_host(&self, host_id: i64, caller: &User) -> DomainResult<()> {
        if caller.user_id != host_id {
            tracing::warn!(
                host_id = host_id,
                caller_id = caller.user_id,
                event = "inbox_forbidden",
                "Caller tried to read another host's messages"
            );
            return Err(DomainError::forbidden());
        }
        Ok(())
    }
}
