use axum::{routing::get, routing::post, Router};

use crate::AppState;
use crate::http::handlers;

pub fn health() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health))
}

pub fn feed() -> Router<AppState> {
    Router::new()
        .route("/api/feed", get(handlers::home_feed))
        .route("/api/stories", get(handlers::stories))
        .route("/api/reels", get(handlers::reels))
}

pub fn posts() -> Router<AppState> {
    Router::new()
        .route("/api/posts/:post_id/like", post(handlers::toggle_like))
        .route("/api/posts/:post_id/comment", post(handlers::comment_post))
}
