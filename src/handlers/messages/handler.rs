//! Message handler implementations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::Message,
    services::MessageService,
    state::AppState,
};

use super::{
    request::{ListMessagesQuery, SendMessageRequest},
    response::{MessagesListResponse, UnreadCountResponse},
};

/// Send a message
pub async fn send_message(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<SendMessageRequest>,
) -> AppResult<(StatusCode, Json<Message>)> {
    payload.validate()?;

    let message = MessageService::send(
        state.db(),
        &auth_user.id,
        &payload.recipient_id,
        &payload.subject,
        &payload.body,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(message)))
}

/// Inbox for the current user
pub async fn inbox(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<ListMessagesQuery>,
) -> AppResult<Json<MessagesListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).min(100);

    let (messages, total) = MessageService::inbox(state.db(), &auth_user.id, page, per_page).await?;

    Ok(Json(MessagesListResponse {
        messages,
        total,
        page,
        per_page,
    }))
}

/// Sent messages for the current user
pub async fn sent(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<ListMessagesQuery>,
) -> AppResult<Json<MessagesListResponse>> {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(20).min(100);

    let (messages, total) = MessageService::sent(state.db(), &auth_user.id, page, per_page).await?;

    Ok(Json(MessagesListResponse {
        messages,
        total,
        page,
        per_page,
    }))
}

/// Read a single message (participants only)
pub async fn get_message(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Message>> {
    let message = MessageService::get_message(state.db(), &auth_user.id, &id).await?;
    Ok(Json(message))
}

/// Mark a message as read (recipient only)
pub async fn mark_read(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Message>> {
    let message = MessageService::mark_read(state.db(), &auth_user.id, &id).await?;
    Ok(Json(message))
}

/// Unread message count for the current user
pub async fn unread_count(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<UnreadCountResponse>> {
    let unread = MessageService::unread_count(state.db(), &auth_user.id).await?;
    Ok(Json(UnreadCountResponse { unread }))
}
