//! Repository for chat data access operations.

use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};
use tracing::info;

use crate::entities::{
    Chat, ChatWithCount, ChatWithStats, CreateChatRequest, Message, UpdateChatRequest,
};
use crate::repos::base::{Page, Repository};
use crate::types::{StoreError, StoreLimits, StoreResult};
use crate::validation;

/// Repository for chat database operations
pub struct ChatRepository {
    pool: SqlitePool,
    limits: StoreLimits,
}

impl ChatRepository {
    /// Create a new chat repository bound to a pool and the configured limits
    pub fn new(pool: SqlitePool, limits: StoreLimits) -> Self {
        Self { pool, limits }
    }

    pub fn limits(&self) -> &StoreLimits {
        &self.limits
    }

    /// Find a chat by its primary key
    pub async fn find_by_id(&self, chat_id: i64) -> StoreResult<Option<Chat>> {
        let chat = sqlx::query_as::<_, Chat>(
            "SELECT id, title, created_at FROM chats WHERE id = ?",
        )
        .bind(chat_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(chat)
    }

    /// Create a chat from a raw title, applying the validation rules first.
    ///
    /// The title is trimmed before storage; an empty or over-length title is
    /// rejected before any write.
    pub async fn create_with_validation(&self, title: &str) -> StoreResult<Chat> {
        let title = validation::chat_title(title, self.limits.max_title_length)?;
        let now = Utc::now();

        let result = sqlx::query("INSERT INTO chats (title, created_at) VALUES (?, ?)")
            .bind(&title)
            .bind(now)
            .execute(&self.pool)
            .await?;

        let chat_id = result.last_insert_rowid();

        info!(chat_id, "created new chat");

        Ok(Chat {
            id: chat_id,
            title,
            created_at: now,
        })
    }

    /// Replace a chat's title, re-running the creation validation rules.
    pub async fn update_with_validation(&self, chat_id: i64, title: &str) -> StoreResult<Chat> {
        let title = validation::chat_title(title, self.limits.max_title_length)?;

        let result = sqlx::query("UPDATE chats SET title = ? WHERE id = ?")
            .bind(&title)
            .bind(chat_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::ChatNotFound(chat_id));
        }

        self.find_by_id(chat_id)
            .await?
            .ok_or(StoreError::ChatNotFound(chat_id))
    }

    /// Fetch a chat together with a page of its messages, newest first.
    ///
    /// Fails with `ChatNotFound` before querying messages when the chat is
    /// absent.
    pub async fn get_with_messages(
        &self,
        chat_id: i64,
        page: Page,
    ) -> StoreResult<(Chat, Vec<Message>)> {
        let chat = self
            .find_by_id(chat_id)
            .await?
            .ok_or(StoreError::ChatNotFound(chat_id))?;

        let messages = sqlx::query_as::<_, Message>(
            "SELECT id, chat_id, text, created_at
             FROM messages WHERE chat_id = ?
             ORDER BY created_at DESC, id DESC
             LIMIT ? OFFSET ?",
        )
        .bind(chat_id)
        .bind(page.limit())
        .bind(page.skip())
        .fetch_all(&self.pool)
        .await?;

        Ok((chat, messages))
    }

    /// Fetch a chat with its live message count, computed at query time.
    pub async fn get_chat_with_message_count(&self, chat_id: i64) -> StoreResult<ChatWithCount> {
        let row = sqlx::query(
            "SELECT c.id, c.title, c.created_at,
                    (SELECT COUNT(*) FROM messages m WHERE m.chat_id = c.id) AS message_count
             FROM chats c WHERE c.id = ?",
        )
        .bind(chat_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::ChatNotFound(chat_id))?;

        Ok(ChatWithCount {
            chat: Chat {
                id: row.try_get("id")?,
                title: row.try_get("title")?,
                created_at: row.try_get("created_at")?,
            },
            message_count: row.try_get("message_count")?,
        })
    }

    /// List chats newest first, each with its message count and most recent
    /// message. An optional search filters titles by case-insensitive
    /// substring match.
    pub async fn get_multi_with_stats(
        &self,
        page: Page,
        search: Option<&str>,
    ) -> StoreResult<Vec<ChatWithStats>> {
        let rows = sqlx::query(
            "SELECT c.id, c.title, c.created_at,
                    (SELECT COUNT(*) FROM messages m WHERE m.chat_id = c.id) AS message_count,
                    lm.id AS last_message_id,
                    lm.chat_id AS last_message_chat_id,
                    lm.text AS last_message_text,
                    lm.created_at AS last_message_created_at
             FROM chats c
             LEFT JOIN messages lm ON lm.id = (
                 SELECT m2.id FROM messages m2
                 WHERE m2.chat_id = c.id
                 ORDER BY m2.created_at DESC, m2.id DESC
                 LIMIT 1
             )
             WHERE (? IS NULL OR c.title LIKE '%' || ? || '%')
             ORDER BY c.created_at DESC, c.id DESC
             LIMIT ? OFFSET ?",
        )
        .bind(search)
        .bind(search)
        .bind(page.limit())
        .bind(page.skip())
        .fetch_all(&self.pool)
        .await?;

        let mut chats = Vec::with_capacity(rows.len());
        for row in rows {
            let last_message_id: Option<i64> = row.try_get("last_message_id")?;
            let last_message = match last_message_id {
                Some(id) => Some(Message {
                    id,
                    chat_id: row.try_get("last_message_chat_id")?,
                    text: row.try_get("last_message_text")?,
                    created_at: row.try_get("last_message_created_at")?,
                }),
                None => None,
            };

            chats.push(ChatWithStats {
                chat: Chat {
                    id: row.try_get("id")?,
                    title: row.try_get("title")?,
                    created_at: row.try_get("created_at")?,
                },
                message_count: row.try_get("message_count")?,
                last_message,
            });
        }

        Ok(chats)
    }

    /// Case-insensitive substring search on chat titles, newest first.
    pub async fn search_by_title(&self, query: &str, page: Page) -> StoreResult<Vec<Chat>> {
        let chats = sqlx::query_as::<_, Chat>(
            "SELECT id, title, created_at FROM chats
             WHERE title LIKE '%' || ? || '%'
             ORDER BY created_at DESC, id DESC
             LIMIT ? OFFSET ?",
        )
        .bind(query)
        .bind(page.limit())
        .bind(page.skip())
        .fetch_all(&self.pool)
        .await?;

        Ok(chats)
    }

    /// List chats created strictly after the given timestamp, newest first.
    pub async fn get_chats_created_after(
        &self,
        after: DateTime<Utc>,
        page: Page,
    ) -> StoreResult<Vec<Chat>> {
        let chats = sqlx::query_as::<_, Chat>(
            "SELECT id, title, created_at FROM chats
             WHERE created_at > ?
             ORDER BY created_at DESC, id DESC
             LIMIT ? OFFSET ?",
        )
        .bind(after)
        .bind(page.limit())
        .bind(page.skip())
        .fetch_all(&self.pool)
        .await?;

        Ok(chats)
    }

    /// Delete a chat and all of its messages in one transaction.
    ///
    /// Fails with `ChatNotFound` when there is nothing to delete, so callers
    /// can distinguish that case from a delete that failed.
    pub async fn delete_with_messages(&self, chat_id: i64) -> StoreResult<()> {
        let mut tx = self.pool.begin().await?;

        let messages_removed = sqlx::query("DELETE FROM messages WHERE chat_id = ?")
            .bind(chat_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let chat_removed = sqlx::query("DELETE FROM chats WHERE id = ?")
            .bind(chat_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if chat_removed == 0 {
            tx.rollback().await?;
            return Err(StoreError::ChatNotFound(chat_id));
        }

        tx.commit().await?;

        info!(chat_id, messages_removed, "deleted chat with its messages");

        Ok(())
    }

    /// Count messages for a chat; zero for a chat with no messages or for a
    /// nonexistent chat. No existence check is performed.
    pub async fn get_message_count(&self, chat_id: i64) -> StoreResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM messages WHERE chat_id = ?")
                .bind(chat_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }
}

impl Repository for ChatRepository {
    type Entity = Chat;
    type Create = CreateChatRequest;
    type Update = UpdateChatRequest;

    async fn create(&self, payload: CreateChatRequest) -> StoreResult<Chat> {
        self.create_with_validation(&payload.title).await
    }

    async fn get(&self, id: i64) -> StoreResult<Option<Chat>> {
        self.find_by_id(id).await
    }

    async fn get_multi(&self, page: Page) -> StoreResult<Vec<Chat>> {
        let chats = sqlx::query_as::<_, Chat>(
            "SELECT id, title, created_at FROM chats
             ORDER BY created_at DESC, id DESC
             LIMIT ? OFFSET ?",
        )
        .bind(page.limit())
        .bind(page.skip())
        .fetch_all(&self.pool)
        .await?;

        Ok(chats)
    }

    async fn update(&self, id: i64, payload: UpdateChatRequest) -> StoreResult<Chat> {
        self.update_with_validation(id, &payload.title).await
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        // Child rows go with the chat via the declared ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM chats WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
