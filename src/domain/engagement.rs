use serde::Serialize;
use time::OffsetDateTime;

/// Outcome of toggling a like: the new state of the `(post_id, user_id)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeToggle {
    Liked,
    Unliked,
}

#[derive(Debug, Clone, Serialize)]
pub struct Comment {
    pub comment_id: i64,
    pub post_id: i64,
    pub user_id: i64,
    pub text: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
