//! Message entity definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single timestamped text entry belonging to exactly one chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Message {
    pub id: i64,
    pub chat_id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMessageRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMessageRequest {
    pub text: String,
}

/// Aggregate length statistics over a message set.
///
/// All fields are exact zeros for an empty set; lengths are character counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct MessageStats {
    pub total_count: i64,
    pub avg_length: f64,
    pub min_length: i64,
    pub max_length: i64,
}
