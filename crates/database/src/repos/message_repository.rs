//! Repository for message data access operations.

use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};
use tracing::info;

use crate::entities::{Chat, CreateMessageRequest, Message, MessageStats, UpdateMessageRequest};
use crate::repos::base::{Page, Repository};
use crate::types::{StoreError, StoreLimits, StoreResult};
use crate::validation;

/// Repository for message database operations
pub struct MessageRepository {
    pool: SqlitePool,
    limits: StoreLimits,
}

impl MessageRepository {
    /// Create a new message repository bound to a pool and the configured limits
    pub fn new(pool: SqlitePool, limits: StoreLimits) -> Self {
        Self { pool, limits }
    }

    pub fn limits(&self) -> &StoreLimits {
        &self.limits
    }

    /// Find a message by its primary key
    pub async fn find_by_id(&self, message_id: i64) -> StoreResult<Option<Message>> {
        let message = sqlx::query_as::<_, Message>(
            "SELECT id, chat_id, text, created_at FROM messages WHERE id = ?",
        )
        .bind(message_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(message)
    }

    /// Create a message in an existing chat, applying the validation rules.
    ///
    /// The chat-existence check runs before text validation, so a missing
    /// chat is reported as `ChatNotFound` even when the text is also invalid.
    /// Check and insert share one transaction; a cascade delete racing this
    /// call trips the foreign key instead of leaving a dangling row, and the
    /// resulting write error is reclassified as `ChatNotFound` as well.
    pub async fn create_with_validation(&self, chat_id: i64, text: &str) -> StoreResult<Message> {
        validation::chat_id(chat_id)?;

        let mut tx = self.pool.begin().await?;

        let chat_exists: Option<i64> = sqlx::query_scalar("SELECT id FROM chats WHERE id = ?")
            .bind(chat_id)
            .fetch_optional(&mut *tx)
            .await?;

        if chat_exists.is_none() {
            tx.rollback().await?;
            return Err(StoreError::ChatNotFound(chat_id));
        }

        let text = validation::message_text(text, self.limits.max_text_length)?;
        let now = Utc::now();

        let insert = sqlx::query("INSERT INTO messages (chat_id, text, created_at) VALUES (?, ?, ?)")
            .bind(chat_id)
            .bind(&text)
            .bind(now)
            .execute(&mut *tx)
            .await;

        let result = match insert {
            Ok(result) => result,
            Err(err) => {
                tx.rollback().await?;
                return Err(self.map_missing_chat(chat_id, err).await);
            }
        };

        let message_id = result.last_insert_rowid();
        if let Err(err) = tx.commit().await {
            return Err(self.map_missing_chat(chat_id, err).await);
        }

        info!(message_id, chat_id, "created new message");

        Ok(Message {
            id: message_id,
            chat_id,
            text,
            created_at: now,
        })
    }

    /// Reclassify a write failure caused by the chat vanishing mid-flight.
    ///
    /// A cascade delete committed between the existence check and the insert
    /// surfaces as a foreign key violation or a stale-snapshot write error;
    /// both mean the chat is gone and must be reported as `ChatNotFound`.
    async fn map_missing_chat(&self, chat_id: i64, err: sqlx::Error) -> StoreError {
        if is_foreign_key_violation(&err) {
            return StoreError::ChatNotFound(chat_id);
        }

        match sqlx::query_scalar::<_, i64>("SELECT id FROM chats WHERE id = ?")
            .bind(chat_id)
            .fetch_optional(&self.pool)
            .await
        {
            Ok(None) => StoreError::ChatNotFound(chat_id),
            _ => err.into(),
        }
    }

    /// Replace a message's text, re-running the creation validation rules.
    pub async fn update_with_validation(&self, message_id: i64, text: &str) -> StoreResult<Message> {
        let text = validation::message_text(text, self.limits.max_text_length)?;

        let result = sqlx::query("UPDATE messages SET text = ? WHERE id = ?")
            .bind(&text)
            .bind(message_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::MessageNotFound(message_id));
        }

        self.find_by_id(message_id)
            .await?
            .ok_or(StoreError::MessageNotFound(message_id))
    }

    /// List a chat's messages, ascending or descending by creation time.
    ///
    /// No existence check on the chat: an unknown chat yields an empty page.
    pub async fn get_multi_by_chat(
        &self,
        chat_id: i64,
        page: Page,
        order_desc: bool,
    ) -> StoreResult<Vec<Message>> {
        let sql = if order_desc {
            "SELECT id, chat_id, text, created_at
             FROM messages WHERE chat_id = ?
             ORDER BY created_at DESC, id DESC
             LIMIT ? OFFSET ?"
        } else {
            "SELECT id, chat_id, text, created_at
             FROM messages WHERE chat_id = ?
             ORDER BY created_at ASC, id ASC
             LIMIT ? OFFSET ?"
        };

        let messages = sqlx::query_as::<_, Message>(sql)
            .bind(chat_id)
            .bind(page.limit())
            .bind(page.skip())
            .fetch_all(&self.pool)
            .await?;

        Ok(messages)
    }

    /// The newest messages of a chat, bounded by `limit`.
    pub async fn get_latest_messages(&self, chat_id: i64, limit: i64) -> StoreResult<Vec<Message>> {
        let page = Page::new(0, limit, &self.limits)?;
        self.get_multi_by_chat(chat_id, page, true).await
    }

    /// Every message joined with its owning chat, newest first.
    pub async fn get_messages_with_chat_info(
        &self,
        page: Page,
    ) -> StoreResult<Vec<(Message, Chat)>> {
        let rows = sqlx::query(
            "SELECT m.id, m.chat_id, m.text, m.created_at,
                    c.id AS chat_pk, c.title AS chat_title, c.created_at AS chat_created_at
             FROM messages m
             JOIN chats c ON c.id = m.chat_id
             ORDER BY m.created_at DESC, m.id DESC
             LIMIT ? OFFSET ?",
        )
        .bind(page.limit())
        .bind(page.skip())
        .fetch_all(&self.pool)
        .await?;

        let mut result = Vec::with_capacity(rows.len());
        for row in rows {
            result.push((
                Message {
                    id: row.try_get("id")?,
                    chat_id: row.try_get("chat_id")?,
                    text: row.try_get("text")?,
                    created_at: row.try_get("created_at")?,
                },
                Chat {
                    id: row.try_get("chat_pk")?,
                    title: row.try_get("chat_title")?,
                    created_at: row.try_get("chat_created_at")?,
                },
            ));
        }

        Ok(result)
    }

    /// Messages of a chat created strictly after the timestamp, ascending.
    pub async fn get_messages_created_after(
        &self,
        chat_id: i64,
        after: DateTime<Utc>,
        limit: i64,
    ) -> StoreResult<Vec<Message>> {
        let page = Page::new(0, limit, &self.limits)?;

        let messages = sqlx::query_as::<_, Message>(
            "SELECT id, chat_id, text, created_at
             FROM messages WHERE chat_id = ? AND created_at > ?
             ORDER BY created_at ASC, id ASC
             LIMIT ?",
        )
        .bind(chat_id)
        .bind(after)
        .bind(page.limit())
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    /// Case-insensitive substring search on message text, optionally scoped
    /// to one chat, newest first.
    pub async fn search_by_text(
        &self,
        query: &str,
        chat_id: Option<i64>,
        page: Page,
    ) -> StoreResult<Vec<Message>> {
        let messages = sqlx::query_as::<_, Message>(
            "SELECT id, chat_id, text, created_at
             FROM messages
             WHERE text LIKE '%' || ? || '%'
               AND (? IS NULL OR chat_id = ?)
             ORDER BY created_at DESC, id DESC
             LIMIT ? OFFSET ?",
        )
        .bind(query)
        .bind(chat_id)
        .bind(chat_id)
        .bind(page.limit())
        .bind(page.skip())
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    /// Delete all messages of a chat; returns the number removed.
    pub async fn delete_by_chat(&self, chat_id: i64) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM messages WHERE chat_id = ?")
            .bind(chat_id)
            .execute(&self.pool)
            .await?;

        let removed = result.rows_affected();
        if removed > 0 {
            info!(chat_id, removed, "bulk deleted chat messages");
        }

        Ok(removed)
    }

    /// Aggregate length statistics over messages, with optional conjunctive
    /// chat/date filters. Lengths are character counts; an empty set yields
    /// exact zeros rather than NULL aggregates.
    pub async fn get_message_stats(
        &self,
        chat_id: Option<i64>,
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
    ) -> StoreResult<MessageStats> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS total_count,
                    COALESCE(AVG(LENGTH(text)), 0.0) AS avg_length,
                    COALESCE(MIN(LENGTH(text)), 0) AS min_length,
                    COALESCE(MAX(LENGTH(text)), 0) AS max_length
             FROM messages
             WHERE (? IS NULL OR chat_id = ?)
               AND (? IS NULL OR created_at >= ?)
               AND (? IS NULL OR created_at <= ?)",
        )
        .bind(chat_id)
        .bind(chat_id)
        .bind(start_date)
        .bind(start_date)
        .bind(end_date)
        .bind(end_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(MessageStats {
            total_count: row.try_get("total_count")?,
            avg_length: row.try_get("avg_length")?,
            min_length: row.try_get("min_length")?,
            max_length: row.try_get("max_length")?,
        })
    }
}

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map_or(false, |db| db.is_foreign_key_violation())
}

impl Repository for MessageRepository {
    type Entity = Message;
    type Create = (i64, CreateMessageRequest);
    type Update = UpdateMessageRequest;

    async fn create(&self, payload: (i64, CreateMessageRequest)) -> StoreResult<Message> {
        let (chat_id, request) = payload;
        self.create_with_validation(chat_id, &request.text).await
    }

    async fn get(&self, id: i64) -> StoreResult<Option<Message>> {
        self.find_by_id(id).await
    }

    async fn get_multi(&self, page: Page) -> StoreResult<Vec<Message>> {
        let messages = sqlx::query_as::<_, Message>(
            "SELECT id, chat_id, text, created_at FROM messages
             ORDER BY created_at DESC, id DESC
             LIMIT ? OFFSET ?",
        )
        .bind(page.limit())
        .bind(page.skip())
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    async fn update(&self, id: i64, payload: UpdateMessageRequest) -> StoreResult<Message> {
        self.update_with_validation(id, &payload.text).await
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM messages WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repos::chat_repository::ChatRepository;
    use crate::test_support::create_test_pool;

    async fn seeded_chat(pool: &SqlitePool) -> i64 {
        ChatRepository::new(pool.clone(), StoreLimits::default())
            .create_with_validation("test chat")
            .await
            .unwrap()
            .id
    }

    fn page(repo: &MessageRepository, skip: i64, limit: i64) -> Page {
        Page::new(skip, limit, repo.limits()).unwrap()
    }

    #[tokio::test]
    async fn create_trims_text_and_assigns_id() {
        let (pool, _dir) = create_test_pool().await;
        let chat_id = seeded_chat(&pool).await;
        let repo = MessageRepository::new(pool, StoreLimits::default());

        let message = repo.create_with_validation(chat_id, "  hi  ").await.unwrap();
        assert!(message.id > 0);
        assert_eq!(message.chat_id, chat_id);
        assert_eq!(message.text, "hi");

        let found = repo.find_by_id(message.id).await.unwrap().unwrap();
        assert_eq!(found.text, "hi");
    }

    #[tokio::test]
    async fn missing_chat_takes_precedence_over_invalid_text() {
        let (pool, _dir) = create_test_pool().await;
        let repo = MessageRepository::new(pool, StoreLimits::default());

        // Both failures apply; chat-not-found must win
        assert!(matches!(
            repo.create_with_validation(999, "   ").await,
            Err(StoreError::ChatNotFound(999))
        ));
    }

    #[tokio::test]
    async fn insert_failure_for_vanished_chat_reports_not_found() {
        let (pool, _dir) = create_test_pool().await;
        let chat_id = seeded_chat(&pool).await;
        let repo = MessageRepository::new(pool.clone(), StoreLimits::default());

        // A direct insert bypassing the existence check trips the foreign
        // key, the same failure a racing cascade delete produces
        let err = sqlx::query("INSERT INTO messages (chat_id, text, created_at) VALUES (?, ?, ?)")
            .bind(321_i64)
            .bind("orphan")
            .bind(Utc::now())
            .execute(&pool)
            .await
            .unwrap_err();
        assert!(is_foreign_key_violation(&err));
        assert!(matches!(
            repo.map_missing_chat(321, err).await,
            StoreError::ChatNotFound(321)
        ));

        // Unrelated write errors against a live chat stay storage errors
        assert!(matches!(
            repo.map_missing_chat(chat_id, sqlx::Error::RowNotFound).await,
            StoreError::Database(_)
        ));
    }

    #[tokio::test]
    async fn create_rejects_invalid_text_and_chat_id() {
        let (pool, _dir) = create_test_pool().await;
        let chat_id = seeded_chat(&pool).await;
        let repo = MessageRepository::new(pool, StoreLimits::default());

        assert!(matches!(
            repo.create_with_validation(chat_id, "").await,
            Err(StoreError::Validation { .. })
        ));

        let too_long = "x".repeat(5001);
        assert!(matches!(
            repo.create_with_validation(chat_id, &too_long).await,
            Err(StoreError::Validation { .. })
        ));

        assert!(matches!(
            repo.create_with_validation(0, "hello").await,
            Err(StoreError::Validation { .. })
        ));
    }

    #[tokio::test]
    async fn listing_honors_order_flag() {
        let (pool, _dir) = create_test_pool().await;
        let chat_id = seeded_chat(&pool).await;
        let repo = MessageRepository::new(pool, StoreLimits::default());

        for text in ["First", "Second", "Third"] {
            repo.create_with_validation(chat_id, text).await.unwrap();
        }

        let asc = repo
            .get_multi_by_chat(chat_id, page(&repo, 0, 10), false)
            .await
            .unwrap();
        let texts: Vec<_> = asc.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["First", "Second", "Third"]);

        let desc = repo
            .get_multi_by_chat(chat_id, page(&repo, 0, 10), true)
            .await
            .unwrap();
        let texts: Vec<_> = desc.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["Third", "Second", "First"]);
    }

    #[tokio::test]
    async fn identical_timestamps_break_ties_by_id() {
        let (pool, _dir) = create_test_pool().await;
        let chat_id = seeded_chat(&pool).await;
        let repo = MessageRepository::new(pool.clone(), StoreLimits::default());

        // Force a shared timestamp so only the id can decide the order
        let stamp = Utc::now();
        for text in ["one", "two", "three"] {
            sqlx::query("INSERT INTO messages (chat_id, text, created_at) VALUES (?, ?, ?)")
                .bind(chat_id)
                .bind(text)
                .bind(stamp)
                .execute(&pool)
                .await
                .unwrap();
        }

        let asc = repo
            .get_multi_by_chat(chat_id, page(&repo, 0, 10), false)
            .await
            .unwrap();
        assert!(asc.windows(2).all(|w| w[0].id < w[1].id));
        let texts: Vec<_> = asc.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["one", "two", "three"]);

        let desc = repo
            .get_multi_by_chat(chat_id, page(&repo, 0, 10), true)
            .await
            .unwrap();
        assert!(desc.windows(2).all(|w| w[0].id > w[1].id));
        let texts: Vec<_> = desc.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["three", "two", "one"]);
    }

    #[tokio::test]
    async fn listing_unknown_chat_is_empty() {
        let (pool, _dir) = create_test_pool().await;
        let repo = MessageRepository::new(pool, StoreLimits::default());

        let messages = repo
            .get_multi_by_chat(777, page(&repo, 0, 10), true)
            .await
            .unwrap();
        assert!(messages.is_empty());
    }

    #[tokio::test]
    async fn pagination_bound_is_rejected_not_clamped() {
        let (pool, _dir) = create_test_pool().await;
        let repo = MessageRepository::new(pool, StoreLimits::default());

        let err = Page::new(0, 150, repo.limits()).unwrap_err();
        assert!(matches!(err, StoreError::Validation { .. }));

        assert!(matches!(
            repo.get_latest_messages(1, 150).await,
            Err(StoreError::Validation { .. })
        ));
    }

    #[tokio::test]
    async fn default_page_size_returns_twenty_most_recent() {
        let (pool, _dir) = create_test_pool().await;
        let chat_id = seeded_chat(&pool).await;
        let repo = MessageRepository::new(pool, StoreLimits::default());

        for i in 1..=25 {
            repo.create_with_validation(chat_id, &format!("msg {i}"))
                .await
                .unwrap();
        }

        let default_page = Page::or_default(0, None, repo.limits()).unwrap();
        let listed = repo
            .get_multi_by_chat(chat_id, default_page, true)
            .await
            .unwrap();
        assert_eq!(listed.len(), 20);
        assert_eq!(listed[0].text, "msg 25");
        assert_eq!(listed[19].text, "msg 6");
    }

    #[tokio::test]
    async fn latest_messages_are_newest_first() {
        let (pool, _dir) = create_test_pool().await;
        let chat_id = seeded_chat(&pool).await;
        let repo = MessageRepository::new(pool, StoreLimits::default());

        for text in ["a", "b", "c"] {
            repo.create_with_validation(chat_id, text).await.unwrap();
        }

        let latest = repo.get_latest_messages(chat_id, 2).await.unwrap();
        let texts: Vec<_> = latest.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["c", "b"]);
    }

    #[tokio::test]
    async fn search_matches_substring_case_insensitively() {
        let (pool, _dir) = create_test_pool().await;
        let chat_a = seeded_chat(&pool).await;
        let chat_b = seeded_chat(&pool).await;
        let repo = MessageRepository::new(pool, StoreLimits::default());

        repo.create_with_validation(chat_a, "Deploy finished").await.unwrap();
        repo.create_with_validation(chat_a, "lunch plans").await.unwrap();
        repo.create_with_validation(chat_b, "redeploy tomorrow").await.unwrap();

        let all = repo
            .search_by_text("DEPLOY", None, page(&repo, 0, 10))
            .await
            .unwrap();
        assert_eq!(all.len(), 2);

        let scoped = repo
            .search_by_text("deploy", Some(chat_a), page(&repo, 0, 10))
            .await
            .unwrap();
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].text, "Deploy finished");
    }

    #[tokio::test]
    async fn created_after_is_strict_and_ascending() {
        let (pool, _dir) = create_test_pool().await;
        let chat_id = seeded_chat(&pool).await;
        let repo = MessageRepository::new(pool, StoreLimits::default());

        let first = repo.create_with_validation(chat_id, "first").await.unwrap();
        repo.create_with_validation(chat_id, "second").await.unwrap();
        repo.create_with_validation(chat_id, "third").await.unwrap();

        let after = repo
            .get_messages_created_after(chat_id, first.created_at, 10)
            .await
            .unwrap();
        let texts: Vec<_> = after.iter().map(|m| m.text.as_str()).collect();
        assert!(!texts.contains(&"first"));
        // Whatever survived the strict filter stays in insertion order
        let expected: Vec<_> = ["second", "third"]
            .iter()
            .filter(|t| texts.contains(*t))
            .map(|t| *t)
            .collect();
        assert_eq!(texts, expected);
    }

    #[tokio::test]
    async fn delete_by_chat_reports_removed_count() {
        let (pool, _dir) = create_test_pool().await;
        let chat_id = seeded_chat(&pool).await;
        let repo = MessageRepository::new(pool, StoreLimits::default());

        for i in 0..4 {
            repo.create_with_validation(chat_id, &format!("m{i}"))
                .await
                .unwrap();
        }

        assert_eq!(repo.delete_by_chat(chat_id).await.unwrap(), 4);
        assert_eq!(repo.delete_by_chat(chat_id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn stats_on_empty_set_are_exact_zeros() {
        let (pool, _dir) = create_test_pool().await;
        let chat_id = seeded_chat(&pool).await;
        let repo = MessageRepository::new(pool, StoreLimits::default());

        let stats = repo
            .get_message_stats(Some(chat_id), None, None)
            .await
            .unwrap();
        assert_eq!(
            stats,
            MessageStats {
                total_count: 0,
                avg_length: 0.0,
                min_length: 0,
                max_length: 0,
            }
        );
    }

    #[tokio::test]
    async fn stats_count_characters() {
        let (pool, _dir) = create_test_pool().await;
        let chat_id = seeded_chat(&pool).await;
        let repo = MessageRepository::new(pool, StoreLimits::default());

        repo.create_with_validation(chat_id, "ab").await.unwrap();
        repo.create_with_validation(chat_id, "abcd").await.unwrap();

        let stats = repo
            .get_message_stats(Some(chat_id), None, None)
            .await
            .unwrap();
        assert_eq!(stats.total_count, 2);
        assert_eq!(stats.min_length, 2);
        assert_eq!(stats.max_length, 4);
        assert!((stats.avg_length - 3.0).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn stats_filters_are_conjunctive() {
        let (pool, _dir) = create_test_pool().await;
        let chat_a = seeded_chat(&pool).await;
        let chat_b = seeded_chat(&pool).await;
        let repo = MessageRepository::new(pool, StoreLimits::default());

        repo.create_with_validation(chat_a, "one").await.unwrap();
        repo.create_with_validation(chat_b, "three").await.unwrap();

        let all = repo.get_message_stats(None, None, None).await.unwrap();
        assert_eq!(all.total_count, 2);

        let only_a = repo.get_message_stats(Some(chat_a), None, None).await.unwrap();
        assert_eq!(only_a.total_count, 1);
        assert_eq!(only_a.min_length, 3);

        // A start date after everything filters the set down to nothing
        let future = Utc::now() + chrono::Duration::hours(1);
        let none = repo
            .get_message_stats(Some(chat_a), Some(future), None)
            .await
            .unwrap();
        assert_eq!(none.total_count, 0);
        assert_eq!(none.max_length, 0);
    }

    #[tokio::test]
    async fn update_revalidates_like_creation() {
        let (pool, _dir) = create_test_pool().await;
        let chat_id = seeded_chat(&pool).await;
        let repo = MessageRepository::new(pool, StoreLimits::default());

        let message = repo.create_with_validation(chat_id, "draft").await.unwrap();
        let updated = repo
            .update_with_validation(message.id, "  final  ")
            .await
            .unwrap();
        assert_eq!(updated.text, "final");

        assert!(matches!(
            repo.update_with_validation(message.id, " ").await,
            Err(StoreError::Validation { .. })
        ));
        assert!(matches!(
            repo.update_with_validation(4242, "text").await,
            Err(StoreError::MessageNotFound(4242))
        ));
    }

    #[tokio::test]
    async fn messages_with_chat_info_join_their_chat() {
        let (pool, _dir) = create_test_pool().await;
        let chat_id = seeded_chat(&pool).await;
        let repo = MessageRepository::new(pool, StoreLimits::default());

        repo.create_with_validation(chat_id, "hello").await.unwrap();

        let joined = repo
            .get_messages_with_chat_info(page(&repo, 0, 10))
            .await
            .unwrap();
        assert_eq!(joined.len(), 1);
        let (message, chat) = &joined[0];
        assert_eq!(message.chat_id, chat.id);
        assert_eq!(chat.title, "test chat");
    }

    #[tokio::test]
    async fn single_delete_reports_existence() {
        let (pool, _dir) = create_test_pool().await;
        let chat_id = seeded_chat(&pool).await;
        let repo = MessageRepository::new(pool, StoreLimits::default());

        let message = repo.create_with_validation(chat_id, "bye").await.unwrap();
        assert!(repo.delete(message.id).await.unwrap());
        assert!(!repo.delete(message.id).await.unwrap());
    }
}
