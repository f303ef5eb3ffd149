//! Parley Database Crate
//!
//! Entities, validation rules and repositories for the Parley chat service:
//! connection management, embedded migrations, and the chat/message
//! repositories that enforce the data invariants.

use sqlx::SqlitePool;

use parley_config::DatabaseConfig;

pub mod connection;
pub mod entities;
pub mod migrations;
pub mod repos;
pub mod types;
pub mod validation;

pub use connection::{prepare_database, DatabaseConnection};
pub use migrations::run_migrations;

// Re-export repositories
pub use repos::{ChatRepository, MessageRepository, Page, Repository};

// Re-export entities
pub use entities::{
    Chat, ChatWithCount, ChatWithStats, CreateChatRequest, CreateMessageRequest, Message,
    MessageStats, UpdateChatRequest, UpdateMessageRequest,
};

// Re-export types
pub use types::{StoreError, StoreLimits, StoreResult};

/// Connect to the configured database and bring the schema up to date
pub async fn initialize_database(config: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    let pool = prepare_database(config).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}
