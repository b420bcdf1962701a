//! Message repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::Message;

/// Repository for message database operations
pub struct MessageRepository;

impl MessageRepository {
    /// Create a new message
    pub async fn create(
        pool: &PgPool,
        sender_id: &Uuid,
        recipient_id: &Uuid,
        subject: &str,
        body: &str,
    ) -> AppResult<Message> {
        let message = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (sender_id, recipient_id, subject, body)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(sender_id)
        .bind(recipient_id)
        .bind(subject)
        .bind(body)
        .fetch_one(pool)
        .await?;

        Ok(message)
    }

    /// Find message by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Message>> {
        let message = sqlx::query_as::<_, Message>(r#"SELECT * FROM messages WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(message)
    }

    /// List messages received by a user
    pub async fn list_inbox(
        pool: &PgPool,
        recipient_id: &Uuid,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Message>, i64)> {
        let messages = sqlx::query_as::<_, Message>(
            r#"
            SELECT * FROM messages
            WHERE recipient_id = $1
            ORDER BY created_at DESC
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(recipient_id)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM messages WHERE recipient_id = $1"#)
                .bind(recipient_id)
                .fetch_one(pool)
                .await?;

        Ok((messages, count))
    }

    /// List messages sent by a user
    pub async fn list_sent(
        pool: &PgPool,
        sender_id: &Uuid,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Message>, i64)> {
        let messages = sqlx::query_as::<_, Message>(
            r#"
            SELECT * FROM messages
            WHERE sender_id = $1
            ORDER BY created_at DESC
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(sender_id)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM messages WHERE sender_id = $1"#)
            .bind(sender_id)
            .fetch_one(pool)
            .await?;

        Ok((messages, count))
    }

    /// Mark a message as read
    pub async fn mark_read(pool: &PgPool, id: &Uuid) -> AppResult<Message> {
        let message = sqlx::query_as::<_, Message>(
            r#"
            UPDATE messages
            SET read_at = COALESCE(read_at, NOW())
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_one(pool)
        .await?;

        Ok(message)
    }

    /// Count unread messages for a user
    pub async fn unread_count(pool: &PgPool, recipient_id: &Uuid) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM messages WHERE recipient_id = $1 AND read_at IS NULL"#,
        )
        .bind(recipient_id)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }
}
