use std::fmt;

use crate::infra::db::Db;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    User,
    Post,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => f.write_str("User"),
            Self::Post => f.write_str("Post"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GuardError {
    #[error("{0} not found")]
    NotFound(Entity),
    #[error("existence check failed")]
    Store(#[from] sqlx::Error),
}

/// Point lookups that must pass before a request touches the data it references.
///
/// Each check yields the confirmed id or the reason it failed. Callers chain
/// checks with `?` so the first failure wins. An id of `None` (present in the
/// request but not an integer) can never match a row and fails without a query.
#[derive(Clone)]
pub struct ExistenceGuard {
    db: Db,
}

impl ExistenceGuard {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    pub async fn require_user(&self, user_id: Option<i64>) -> Result<i64, GuardError> {
        let Some(user_id) = user_id else {
            return Err(GuardError::NotFound(Entity::User));
        };

        let found: Option<i64> = sqlx::query_scalar("SELECT user_id FROM users WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(self.db.pool())
            .await?;

        found.ok_or(GuardError::NotFound(Entity::User))
    }

    pub async fn require_post(&self, post_id: Option<i64>) -> Result<i64, GuardError> {
        let Some(post_id) = post_id else {
            return Err(GuardError::NotFound(Entity::Post));
        };

        let found: Option<i64> = sqlx::query_scalar("SELECT post_id FROM posts WHERE post_id = $1")
            .bind(post_id)
            .fetch_optional(self.db.pool())
            .await?;

        found.ok_or(GuardError::NotFound(Entity::Post))
    }
}
