//! Message service

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::repositories::{MessageRepository, UserRepository},
    error::{AppError, AppResult},
    models::Message,
};

/// Message service for business logic
pub struct MessageService;

impl MessageService {
    /// Send a message to another user
    pub async fn send(
        pool: &PgPool,
        sender_id: &Uuid,
        recipient_id: &Uuid,
        subject: &str,
        body: &str,
    ) -> AppResult<Message> {
        if sender_id == recipient_id {
            return Err(AppError::Validation(
                "Cannot send a message to yourself".to_string(),
            ));
        }

        if UserRepository::find_by_id(pool, recipient_id).await?.is_none() {
            return Err(AppError::NotFound("Recipient not found".to_string()));
        }

        MessageRepository::create(pool, sender_id, recipient_id, subject, body).await
    }

    /// Inbox for a user
    pub async fn inbox(
        pool: &PgPool,
        user_id: &Uuid,
        page: u32,
        per_page: u32,
    ) -> AppResult<(Vec<Message>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        MessageRepository::list_inbox(pool, user_id, offset, limit).await
    }

    /// Sent messages for a user
    pub async fn sent(
        pool: &PgPool,
        user_id: &Uuid,
        page: u32,
        per_page: u32,
    ) -> AppResult<(Vec<Message>, i64)> {
        let offset = ((page - 1) * per_page) as i64;
        let limit = per_page as i64;

        MessageRepository::list_sent(pool, user_id, offset, limit).await
    }

    /// Read a single message; only its participants may
    pub async fn get_message(pool: &PgPool, user_id: &Uuid, id: &Uuid) -> AppResult<Message> {
        let message = MessageRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Message not found".to_string()))?;

        if !message.involves(user_id) {
            return Err(AppError::Forbidden(
                "Message belongs to another conversation".to_string(),
            ));
        }

        Ok(message)
    }

    /// Mark a message as read; only the recipient may
    pub async fn mark_read(pool: &PgPool, user_id: &Uuid, id: &Uuid) -> AppResult<Message> {
        let message = Self::get_message(pool, user_id, id).await?;

        if message.recipient_id != *user_id {
            return Err(AppError::Forbidden(
                "Only the recipient can mark a message as read".to_string(),
            ));
        }

        MessageRepository::mark_read(pool, id).await
    }

    /// Count unread messages for a user
    pub async fn unread_count(pool: &PgPool, user_id: &Uuid) -> AppResult<i64> {
        MessageRepository::unread_count(pool, user_id).await
    }
}
