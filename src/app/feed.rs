use anyhow::Result;
use sqlx::postgres::PgRow;
use sqlx::Row;

use crate::domain::page::Page;
use crate::domain::post::{FeedPost, MediaType};
use crate::infra::db::Db;

#[derive(Clone)]
pub struct FeedService {
    db: Db,
}

impl FeedService {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Posts from everyone `user_id` follows plus their own, newest first.
    pub async fn home_feed(&self, user_id: i64, page: Page) -> Result<Vec<FeedPost>> {
        let rows = sqlx::query(
            "SELECT p.post_id, p.user_id, u.username, u.profile_pic_url, \
                    p.media_url, p.caption, p.media_type::text AS media_type, p.created_at, \
                    (SELECT COUNT(*) FROM likes l WHERE l.post_id = p.post_id) AS like_count, \
                    (SELECT COUNT(*) FROM comments c WHERE c.post_id = p.post_id) AS comment_count, \
                    EXISTS ( \
                        SELECT 1 FROM likes l WHERE l.post_id = p.post_id AND l.user_id = $1 \
                    ) AS is_liked \
             FROM posts p \
             JOIN users u ON p.user_id = u.user_id \
             WHERE p.user_id IN ( \
                 SELECT following_id FROM followers WHERE follower_id = $1 \
                 UNION SELECT $1::BIGINT \
             ) \
             ORDER BY p.created_at DESC, p.post_id DESC \
             LIMIT $2 OFFSET $3",
        )
        .bind(user_id)
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(row_to_feed_post).collect()
    }

    /// Every reel regardless of author, newest first. `viewer_id` only drives `is_liked`.
    pub async fn reels(&self, viewer_id: i64, page: Page) -> Result<Vec<FeedPost>> {
        let rows = sqlx::query(
            "SELECT p.post_id, p.user_id, u.username, u.profile_pic_url, \
                    p.media_url, p.caption, p.media_type::text AS media_type, p.created_at, \
                    (SELECT COUNT(*) FROM likes l WHERE l.post_id = p.post_id) AS like_count, \
                    (SELECT COUNT(*) FROM comments c WHERE c.post_id = p.post_id) AS comment_count, \
                    EXISTS ( \
                        SELECT 1 FROM likes l WHERE l.post_id = p.post_id AND l.user_id = $1 \
                    ) AS is_liked \
             FROM posts p \
             JOIN users u ON p.user_id = u.user_id \
             WHERE p.media_type = $2::post_media_type \
             ORDER BY p.created_at DESC, p.post_id DESC \
             LIMIT $3 OFFSET $4",
        )
        .bind(viewer_id)
        .bind(MediaType::Reel.as_db())
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(row_to_feed_post).collect()
    }
}

fn row_to_feed_post(row: &PgRow) -> Result<FeedPost> {
    let media_type: String = row.try_get("media_type")?;
    let media_type = MediaType::from_db(&media_type)
        .ok_or_else(|| anyhow::anyhow!("unknown post media type: {}", media_type))?;

    Ok(FeedPost {
        post_id: row.try_get("post_id")?,
        user_id: row.try_get("user_id")?,
        username: row.try_get("username")?,
        profile_pic_url: row.try_get("profile_pic_url")?,
        media_url: row.try_get("media_url")?,
        caption: row.try_get("caption")?,
        media_type,
        created_at: row.try_get("created_at")?,
        like_count: row.try_get("like_count")?,
        comment_count: row.try_get("comment_count")?,
        is_liked: row.try_get("is_liked")?,
    })
}
