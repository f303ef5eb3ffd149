use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use parley_database::{Chat, Message, Page};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateChatBody {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct ListChatsQuery {
    #[serde(default)]
    pub skip: i64,
    pub limit: Option<i64>,
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatListItem {
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub message_count: i64,
    pub last_message: Option<Message>,
}

#[derive(Debug, Deserialize)]
pub struct ChatMessagesQuery {
    #[serde(default)]
    pub offset: i64,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct ChatWithMessagesResponse {
    pub chat: Chat,
    pub messages: Vec<Message>,
}

#[derive(Debug, Deserialize)]
pub struct ListMessagesQuery {
    #[serde(default)]
    pub skip: i64,
    pub limit: Option<i64>,
    #[serde(default = "default_order_desc")]
    pub order_desc: bool,
}

fn default_order_desc() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct CreateMessageBody {
    pub text: String,
}

pub async fn create_chat(
    State(state): State<AppState>,
    Json(body): Json<CreateChatBody>,
) -> Result<Json<Chat>, ApiError> {
    let chat = state.chats().create_with_validation(&body.title).await?;
    Ok(Json(chat))
}

pub async fn list_chats(
    State(state): State<AppState>,
    Query(query): Query<ListChatsQuery>,
) -> Result<Json<Vec<ChatListItem>>, ApiError> {
    let repo = state.chats();
    let page = Page::or_default(query.skip, query.limit, repo.limits())?;

    let rows = repo
        .get_multi_with_stats(page, query.search.as_deref())
        .await?;

    let items = rows
        .into_iter()
        .map(|row| ChatListItem {
            id: row.chat.id,
            title: row.chat.title,
            created_at: row.chat.created_at,
            message_count: row.message_count,
            last_message: row.last_message,
        })
        .collect();

    Ok(Json(items))
}

pub async fn get_chat(
    State(state): State<AppState>,
    Path(chat_id): Path<i64>,
    Query(query): Query<ChatMessagesQuery>,
) -> Result<Json<ChatWithMessagesResponse>, ApiError> {
    let repo = state.chats();
    let page = Page::or_default(query.offset, query.limit, repo.limits())?;

    let (chat, messages) = repo.get_with_messages(chat_id, page).await?;
    Ok(Json(ChatWithMessagesResponse { chat, messages }))
}

pub async fn delete_chat(
    State(state): State<AppState>,
    Path(chat_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.chats().delete_with_messages(chat_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn create_message(
    State(state): State<AppState>,
    Path(chat_id): Path<i64>,
    Json(body): Json<CreateMessageBody>,
) -> Result<Json<Message>, ApiError> {
    let message = state
        .messages()
        .create_with_validation(chat_id, &body.text)
        .await?;
    Ok(Json(message))
}

pub async fn list_messages(
    State(state): State<AppState>,
    Path(chat_id): Path<i64>,
    Query(query): Query<ListMessagesQuery>,
) -> Result<Json<Vec<Message>>, ApiError> {
    let repo = state.messages();
    let page = Page::or_default(query.skip, query.limit, repo.limits())?;

    let messages = repo
        .get_multi_by_chat(chat_id, page, query.order_desc)
        .await?;
    Ok(Json(messages))
}
