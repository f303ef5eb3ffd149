use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use parley_database::{Message, MessageStats, Page, Repository, StoreError};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
    pub chat_id: Option<i64>,
    #[serde(default)]
    pub skip: i64,
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    pub chat_id: Option<i64>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

pub async fn get_message(
    State(state): State<AppState>,
    Path(message_id): Path<i64>,
) -> Result<Json<Message>, ApiError> {
    let message = state
        .messages()
        .find_by_id(message_id)
        .await?
        .ok_or(StoreError::MessageNotFound(message_id))?;
    Ok(Json(message))
}

pub async fn delete_message(
    State(state): State<AppState>,
    Path(message_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let removed = state.messages().delete(message_id).await?;
    if !removed {
        return Err(StoreError::MessageNotFound(message_id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn search_messages(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Message>>, ApiError> {
    let repo = state.messages();
    let page = Page::or_default(query.skip, query.limit, repo.limits())?;

    let messages = repo.search_by_text(&query.q, query.chat_id, page).await?;
    Ok(Json(messages))
}

pub async fn message_stats(
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<MessageStats>, ApiError> {
    let stats = state
        .messages()
        .get_message_stats(query.chat_id, query.start_date, query.end_date)
        .await?;
    Ok(Json(stats))
}
