use serde::{Deserialize, Serialize};
use validator::Validate;

use jb_core::services::SendMessage;

/// Body of `POST /messages`; the sender is the caller
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendMessageRequest {
    pub receiver_id: i64,
    pub item_id: i64,
    #[validate(length(min = 1, max = 2000))]
    pub text: String,
}

impl From<SendMessageRequest> for SendMessage {
    fn from(request: SendMessageRequest) -> Self {
        Self {
            receiver_id: request.receiver_id,
            item_id: request.item_id,
            text: request.text,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddFavoriteRequest {
    pub item_id: i64,
}
