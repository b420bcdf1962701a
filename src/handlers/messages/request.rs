//! Message request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::constants::{MAX_MESSAGE_BODY_LENGTH, MAX_MESSAGE_SUBJECT_LENGTH};

/// Send message request
#[derive(Debug, Deserialize, Validate)]
pub struct SendMessageRequest {
    pub recipient_id: Uuid,

    #[validate(length(min = 1, max = MAX_MESSAGE_SUBJECT_LENGTH))]
    pub subject: String,

    #[validate(length(min = 1, max = MAX_MESSAGE_BODY_LENGTH))]
    pub body: String,
}

/// List messages query parameters
#[derive(Debug, Deserialize)]
pub struct ListMessagesQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}
