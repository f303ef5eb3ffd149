use sqlx::SqlitePool;

use parley_database::{ChatRepository, MessageRepository, StoreLimits};

#[derive(Clone)]
pub struct AppState {
    pool: SqlitePool,
    limits: StoreLimits,
}

impl AppState {
    pub fn new(pool: SqlitePool, limits: StoreLimits) -> Self {
        Self { pool, limits }
    }

    pub fn limits(&self) -> &StoreLimits {
        &self.limits
    }

    pub fn chats(&self) -> ChatRepository {
        ChatRepository::new(self.pool.clone(), self.limits)
    }

    pub fn messages(&self) -> MessageRepository {
        MessageRepository::new(self.pool.clone(), self.limits)
    }
}
