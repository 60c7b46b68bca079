use anyhow::Result;
use sqlx::Row;

use crate::domain::engagement::{Comment, LikeToggle};
use crate::infra::db::Db;

#[derive(Clone)]
pub struct EngagementService {
    db: Db,
}

impl EngagementService {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Flips the like state of `(post_id, user_id)`.
    ///
    /// The existing like is removed first; only when nothing was removed is a
    /// new one inserted. The insert tolerates a concurrent toggle having
    /// inserted the same pair, so racing calls never fail on the unique key.
    pub async fn toggle_like(&self, post_id: i64, user_id: i64) -> Result<LikeToggle> {
        let removed = sqlx::query("DELETE FROM likes WHERE post_id = $1 AND user_id = $2")
            .bind(post_id)
            .bind(user_id)
            .execute(self.db.pool())
            .await?;

        if removed.rows_affected() > 0 {
            return Ok(LikeToggle::Unliked);
        }

        sqlx::query(
            "INSERT INTO likes (post_id, user_id, created_at) VALUES ($1, $2, NOW()) \
             ON CONFLICT (post_id, user_id) DO NOTHING",
        )
        .bind(post_id)
        .bind(user_id)
        .execute(self.db.pool())
        .await?;

        Ok(LikeToggle::Liked)
    }

    pub async fn add_comment(&self, post_id: i64, user_id: i64, text: String) -> Result<Comment> {
        let row = sqlx::query(
            "INSERT INTO comments (post_id, user_id, text, created_at) \
             VALUES ($1, $2, $3, NOW()) \
             RETURNING comment_id, post_id, user_id, text, created_at",
        )
        .bind(post_id)
        .bind(user_id)
        .bind(text)
        .fetch_one(self.db.pool())
        .await?;

        Ok(Comment {
            comment_id: row.try_get("comment_id")?,
            post_id: row.try_get("post_id")?,
            user_id: row.try_get("user_id")?,
            text: row.try_get("text")?,
            created_at: row.try_get("created_at")?,
        })
    }
}
