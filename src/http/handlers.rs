use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::app::engagement::EngagementService;
use crate::app::feed::FeedService;
use crate::app::guard::ExistenceGuard;
use crate::app::stories::StoryService;
use crate::domain::engagement::LikeToggle;
use crate::domain::page::Page;
use crate::domain::post::FeedPost;
use crate::domain::story::Story;
use crate::http::params::{
    parse_id, present, CommentRequest, LikeRequest, PagedQuery, UserQuery,
};
use crate::http::AppError;
use crate::AppState;

#[derive(Serialize)]
pub(crate) struct HealthResponse {
    status: &'static str,
}

pub(crate) async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let status = if state.db.ping().await.is_ok() {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse { status })
}

#[derive(Serialize)]
pub struct FeedResponse {
    pub feed: Vec<FeedPost>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

#[derive(Serialize)]
pub struct StoriesResponse {
    pub stories: Vec<Story>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

#[derive(Serialize)]
pub struct ReelsResponse {
    pub reels: Vec<FeedPost>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct CommentResponse {
    pub message: &'static str,
    pub comment_id: i64,
}

/// A query string that does not decode (e.g. a repeated `user_id`) yields no
/// usable `user_id`.
fn query_or_reject<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, AppError> {
    query.map(|Query(query)| query).map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejected query string");
        AppError::bad_request("user_id is required")
    })
}

/// A missing or undecodable JSON body reads as `{}`.
fn body_or_empty(payload: Option<Json<Value>>) -> Value {
    payload.map_or(Value::Null, |Json(body)| body)
}

fn empty_note<T>(items: &[T], note: &'static str) -> Option<&'static str> {
    items.is_empty().then_some(note)
}

pub async fn home_feed(
    State(state): State<AppState>,
    query: Result<Query<PagedQuery>, QueryRejection>,
) -> Result<Json<FeedResponse>, AppError> {
    const FAILURE: &str = "Failed to fetch feed";

    let query = query_or_reject(query)?;
    let Some(raw_user_id) = present(query.user_id.as_deref()) else {
        return Err(AppError::bad_request("user_id is required"));
    };
    let page = Page::from_params(query.page.as_deref(), query.limit.as_deref());

    let guard = ExistenceGuard::new(state.db.clone());
    let user_id = guard
        .require_user(parse_id(raw_user_id))
        .await
        .map_err(|err| AppError::from_guard(err, FAILURE))?;

    let service = FeedService::new(state.db.clone());
    let feed = service.home_feed(user_id, page).await.map_err(|err| {
        tracing::error!(error = ?err, user_id, "failed to fetch feed");
        AppError::internal(FAILURE)
    })?;

    let message = empty_note(&feed, "No posts available");
    Ok(Json(FeedResponse { feed, message }))
}

pub async fn stories(
    State(state): State<AppState>,
    query: Result<Query<UserQuery>, QueryRejection>,
) -> Result<Json<StoriesResponse>, AppError> {
    const FAILURE: &str = "Failed to fetch stories";

    let query = query_or_reject(query)?;
    let Some(raw_user_id) = present(query.user_id.as_deref()) else {
        return Err(AppError::bad_request("user_id is required"));
    };

    let guard = ExistenceGuard::new(state.db.clone());
    let user_id = guard
        .require_user(parse_id(raw_user_id))
        .await
        .map_err(|err| AppError::from_guard(err, FAILURE))?;

    let service = StoryService::new(state.db.clone());
    let stories = service.active_stories(user_id).await.map_err(|err| {
        tracing::error!(error = ?err, user_id, "failed to fetch stories");
        AppError::internal(FAILURE)
    })?;

    let message = empty_note(&stories, "No active stories");
    Ok(Json(StoriesResponse { stories, message }))
}

pub async fn reels(
    State(state): State<AppState>,
    query: Result<Query<PagedQuery>, QueryRejection>,
) -> Result<Json<ReelsResponse>, AppError> {
    const FAILURE: &str = "Failed to fetch reels";

    let query = query_or_reject(query)?;
    let Some(raw_user_id) = present(query.user_id.as_deref()) else {
        return Err(AppError::bad_request("user_id is required"));
    };
    let page = Page::from_params(query.page.as_deref(), query.limit.as_deref());

    let guard = ExistenceGuard::new(state.db.clone());
    let user_id = guard
        .require_user(parse_id(raw_user_id))
        .await
        .map_err(|err| AppError::from_guard(err, FAILURE))?;

    let service = FeedService::new(state.db.clone());
    let reels = service.reels(user_id, page).await.map_err(|err| {
        tracing::error!(error = ?err, user_id, "failed to fetch reels");
        AppError::internal(FAILURE)
    })?;

    let message = empty_note(&reels, "No reels available");
    Ok(Json(ReelsResponse { reels, message }))
}

/// Likes the post for `user_id`, or removes the like if it is already there.
pub async fn toggle_like(
    Path(post_id): Path<String>,
    State(state): State<AppState>,
    payload: Option<Json<Value>>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    const FAILURE: &str = "Failed to process like/unlike";

    let payload = LikeRequest::from_body(&body_or_empty(payload));
    let Some(raw_user_id) = payload.user_id.filter(|id| !id.is_blank()) else {
        return Err(AppError::bad_request("user_id is required"));
    };

    let guard = ExistenceGuard::new(state.db.clone());
    let post_id = guard
        .require_post(parse_id(&post_id))
        .await
        .map_err(|err| AppError::from_guard(err, FAILURE))?;
    let user_id = guard
        .require_user(raw_user_id.as_id())
        .await
        .map_err(|err| AppError::from_guard(err, FAILURE))?;

    let service = EngagementService::new(state.db.clone());
    let outcome = service.toggle_like(post_id, user_id).await.map_err(|err| {
        tracing::error!(error = ?err, post_id, user_id, "failed to toggle like");
        AppError::internal(FAILURE)
    })?;
    tracing::debug!(post_id, user_id, outcome = ?outcome, "like toggled");

    let response = match outcome {
        LikeToggle::Liked => (
            StatusCode::CREATED,
            Json(MessageResponse {
                message: "Post liked successfully",
            }),
        ),
        LikeToggle::Unliked => (
            StatusCode::OK,
            Json(MessageResponse {
                message: "Post unliked successfully",
            }),
        ),
    };

    Ok(response)
}

pub async fn comment_post(
    Path(post_id): Path<String>,
    State(state): State<AppState>,
    payload: Option<Json<Value>>,
) -> Result<(StatusCode, Json<CommentResponse>), AppError> {
    const FAILURE: &str = "Failed to add comment";

    let payload = CommentRequest::from_body(&body_or_empty(payload));
    let user_id = payload.user_id.filter(|id| !id.is_blank());
    let text = payload.text.filter(|text| !text.is_empty());
    let (Some(raw_user_id), Some(text)) = (user_id, text) else {
        return Err(AppError::bad_request("user_id and text are required"));
    };

    let guard = ExistenceGuard::new(state.db.clone());
    let post_id = guard
        .require_post(parse_id(&post_id))
        .await
        .map_err(|err| AppError::from_guard(err, FAILURE))?;
    let user_id = guard
        .require_user(raw_user_id.as_id())
        .await
        .map_err(|err| AppError::from_guard(err, FAILURE))?;

    let service = EngagementService::new(state.db.clone());
    let comment = service
        .add_comment(post_id, user_id, text)
        .await
        .map_err(|err| {
            tracing::error!(error = ?err, post_id, user_id, "failed to add comment");
            AppError::internal(FAILURE)
        })?;
    tracing::debug!(post_id, user_id, comment_id = comment.comment_id, "comment added");

    Ok((
        StatusCode::CREATED,
        Json(CommentResponse {
            message: "Comment added successfully",
            comment_id: comment.comment_id,
        }),
    ))
}
