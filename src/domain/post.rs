use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A post as it appears in the home feed or the reels listing, joined with its
/// author and engagement counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedPost {
    pub post_id: i64,
    pub user_id: i64,
    pub username: String,
    pub profile_pic_url: Option<String>,
    pub media_url: String,
    pub caption: Option<String>,
    pub media_type: MediaType,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub like_count: i64,
    pub comment_count: i64,
    pub is_liked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Post,
    Reel,
}

impl MediaType {
    pub fn from_db(value: &str) -> Option<Self> {
        match value {
            "post" => Some(Self::Post),
            "reel" => Some(Self::Reel),
            _ => None,
        }
    }

    pub fn as_db(&self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Reel => "reel",
        }
    }
}
