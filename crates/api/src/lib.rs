mod error;
mod state;

pub mod routes;

pub use error::ApiError;
pub use state::AppState;

use axum::{
    http::header::CONTENT_TYPE,
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health_check))
        // Chat routes
        .route("/api/chats", get(routes::chats::list_chats))
        .route("/api/chats", post(routes::chats::create_chat))
        .route("/api/chats/:chat_id", get(routes::chats::get_chat))
        .route("/api/chats/:chat_id", delete(routes::chats::delete_chat))
        .route(
            "/api/chats/:chat_id/messages",
            get(routes::chats::list_messages),
        )
        .route(
            "/api/chats/:chat_id/messages",
            post(routes::chats::create_message),
        )
        // Message routes
        .route("/api/messages/search", get(routes::messages::search_messages))
        .route("/api/messages/stats", get(routes::messages::message_stats))
        .route(
            "/api/messages/:message_id",
            get(routes::messages::get_message),
        )
        .route(
            "/api/messages/:message_id",
            delete(routes::messages::delete_message),
        )
        .with_state(state)
        .layer(cors_layer())
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
}
