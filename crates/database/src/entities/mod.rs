//! Domain entities for the storage layer
//!
//! Plain data structs decoded straight from rows; derived views carry
//! query-time aggregates, never cached counters.

pub mod chat;
pub mod message;

pub use chat::{Chat, ChatWithCount, ChatWithStats, CreateChatRequest, UpdateChatRequest};
pub use message::{CreateMessageRequest, Message, MessageStats, UpdateMessageRequest};
