//! Chat entity definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::message::Message;

/// A named conversation container owning zero-or-more messages.
///
/// Plain data: validation lives in [`crate::validation`], not on the type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Chat {
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// A chat paired with its live message count, computed at query time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatWithCount {
    pub chat: Chat,
    pub message_count: i64,
}

/// One row of the chat listing: chat, live message count, most recent message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatWithStats {
    pub chat: Chat,
    pub message_count: i64,
    pub last_message: Option<Message>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateChatRequest {
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateChatRequest {
    pub title: String,
}
