use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

use crate::errors::ApiError;

/// A registered account. Not serializable on purpose: responses must never
/// carry the password hash, so anything sent to a client goes through
/// [`PublicUser`] or a dedicated response struct.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}

/// The `{id, username}` projection exposed by the user listing.
#[derive(Debug, Serialize, FromRow)]
pub struct PublicUser {
    pub id: i64,
    pub username: String,
}

impl User {
    /// Insert a new user. The username must be unique; the pre-insert check
    /// and the UNIQUE constraint both report the duplicate as a conflict.
    pub async fn create(
        pool: &SqlitePool,
        username: &str,
        password_hash: &str,
    ) -> Result<User, ApiError> {
        let mut tx = pool.begin().await?;

        let taken: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = ?")
            .bind(username)
            .fetch_one(&mut *tx)
            .await?;
        if taken > 0 {
            return Err(ApiError::Conflict("Username already exists".into()));
        }

        let result = sqlx::query("INSERT INTO users (username, password_hash) VALUES (?, ?)")
            .bind(username)
            .bind(password_hash)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                // A concurrent insert can slip past the check; the constraint
                // catches it and it is still a duplicate, not a 500.
                if is_unique_violation(&e) {
                    ApiError::Conflict("Username already exists".into())
                } else {
                    ApiError::Storage(e)
                }
            })?;
        let id = result.last_insert_rowid();

        tx.commit().await?;

        Ok(User {
            id,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        })
    }

    pub async fn find_by_username(
        pool: &SqlitePool,
        username: &str,
    ) -> Result<Option<User>, ApiError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(pool)
        .await?;
        Ok(user)
    }

    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, ApiError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(user)
    }

    pub async fn list_public(pool: &SqlitePool) -> Result<Vec<PublicUser>, ApiError> {
        let users = sqlx::query_as::<_, PublicUser>("SELECT id, username FROM users ORDER BY id")
            .fetch_all(pool)
            .await?;
        Ok(users)
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .map(|db| db.message().contains("UNIQUE constraint failed"))
        .unwrap_or(false)
}
