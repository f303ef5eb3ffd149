//! Repository implementations

pub mod base;
pub mod chat_repository;
pub mod message_repository;

pub use base::{Page, Repository};
pub use chat_repository::ChatRepository;
pub use message_repository::MessageRepository;
