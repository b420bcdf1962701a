//! Message response DTOs

use serde::Serialize;

use crate::models::Message;

/// Message list response
#[derive(Debug, Serialize)]
pub struct MessagesListResponse {
    pub messages: Vec<Message>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

/// Unread count response
#[derive(Debug, Serialize)]
pub struct UnreadCountResponse {
    pub unread: i64,
}
