use anyhow::Result;
use sqlx::postgres::PgRow;
use sqlx::Row;

use crate::domain::story::Story;
use crate::infra::db::Db;

#[derive(Clone)]
pub struct StoryService {
    db: Db,
}

impl StoryService {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Unexpired stories from everyone `user_id` follows plus their own, newest
    /// first. Expiry is judged by the store clock; expired rows stay in place.
    pub async fn active_stories(&self, user_id: i64) -> Result<Vec<Story>> {
        let rows = sqlx::query(
            "SELECT s.story_id, s.user_id, u.username, u.profile_pic_url, \
                    s.media_url, s.created_at, s.expires_at \
             FROM stories s \
             JOIN users u ON s.user_id = u.user_id \
             WHERE s.user_id IN ( \
                 SELECT following_id FROM followers WHERE follower_id = $1 \
                 UNION SELECT $1::BIGINT \
             ) \
               AND s.expires_at > NOW() \
             ORDER BY s.created_at DESC, s.story_id DESC",
        )
        .bind(user_id)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(row_to_story).collect()
    }
}

fn row_to_story(row: &PgRow) -> Result<Story> {
    Ok(Story {
        story_id: row.try_get("story_id")?,
        user_id: row.try_get("user_id")?,
        username: row.try_get("username")?,
        profile_pic_url: row.try_get("profile_pic_url")?,
        media_url: row.try_get("media_url")?,
        created_at: row.try_get("created_at")?,
        expires_at: row.try_get("expires_at")?,
    })
}
