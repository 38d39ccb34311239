//! Message entity: a guest writing to a host about a listing.

use serde::{Deserialize, Serialize};

use crate::domain::record::Record;
use crate::errors::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub item_id: i64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMessage {
    pub sender_id: i64,
    pub receiver_id: i64,
    pub item_id: i64,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePatch {
    pub text: Option<String>,
}

impl Record for Message {
    const RESOURCE: &'static str = "Message";
    const FILTERS: &'static [&'static str] = &["sender_id", "receiver_id", "item_id"];

    type New = NewMessage;
    type Patch = MessagePatch;

    fn from_new(new: NewMessage) -> Self {
        Self {
            message_id: 0,
            sender_id: new.sender_id,
            receiver_id: new.receiver_id,
            item_id: new.item_id,
            text: new.text,
        }
    }

    fn id(&self) -> i64 {
        self.message_id
    }

    fn set_id(&mut self, id: i64) {
        self.message_id = id;
    }

    fn apply(&mut self, patch: MessagePatch) {
        if let Some(text) = patch.text {
            self.text = text;
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if !jb_shared::validation::not_empty(&self.text) {
            return Err(ValidationError::required("text"));
        }
        Ok(())
    }

    fn filter_value(&self, field: &str) -> Option<i64> {
        match field {
            "sender_id" => Some(self.sender_id),
            "receiver_id" => Some(self.receiver_id),
            "item_id" => Some(self.item_id),
            _ => None,
        }
    }
}
