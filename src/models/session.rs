use actix_web::HttpRequest;
use chrono::{DateTime, Duration, Utc};
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

use crate::errors::ApiError;
use crate::models::user::User;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "session_id";

/// How long a session stays valid after login.
const SESSION_TTL_HOURS: i64 = 24;

/// A server-side login session. The token is a random UUID, handed to the
/// client in a cookie; everything else stays in the database. Each login
/// issues a fresh token, so one user may hold several live sessions.
#[derive(Debug, FromRow)]
pub struct Session {
    pub session_id: String,
    pub user_id: i64,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Bind a new session to `user_id` and return it. The caller puts the
    /// token in the response cookie.
    pub async fn establish(pool: &SqlitePool, user_id: i64) -> Result<Session, ApiError> {
        let session = Session {
            session_id: Uuid::new_v4().to_string(),
            user_id,
            expires_at: Utc::now() + Duration::hours(SESSION_TTL_HOURS),
        };

        sqlx::query("INSERT INTO sessions (session_id, user_id, expires_at) VALUES (?, ?, ?)")
            .bind(&session.session_id)
            .bind(session.user_id)
            .bind(session.expires_at)
            .execute(pool)
            .await?;

        Ok(session)
    }

    /// Look up a session by token. Expired rows are deleted on sight and
    /// reported as absent.
    pub async fn resolve(pool: &SqlitePool, session_id: &str) -> Result<Option<Session>, ApiError> {
        let session = sqlx::query_as::<_, Session>(
            "SELECT session_id, user_id, expires_at FROM sessions WHERE session_id = ?",
        )
        .bind(session_id)
        .fetch_optional(pool)
        .await?;

        match session {
            Some(session) if session.expires_at < Utc::now() => {
                sqlx::query("DELETE FROM sessions WHERE session_id = ?")
                    .bind(session_id)
                    .execute(pool)
                    .await?;
                Ok(None)
            }
            other => Ok(other),
        }
    }

    /// Invalidate a session. Idempotent: terminating an unknown or already
    /// removed token succeeds.
    pub async fn terminate(pool: &SqlitePool, session_id: &str) -> Result<(), ApiError> {
        sqlx::query("DELETE FROM sessions WHERE session_id = ?")
            .bind(session_id)
            .execute(pool)
            .await?;
        Ok(())
    }
}

/// The authorization flow shared by every protected handler:
/// read the session cookie, resolve the session, then the owning user.
/// No or invalid session is 401; a session whose user no longer exists is 404.
pub async fn resolve_user(pool: &SqlitePool, req: &HttpRequest) -> Result<User, ApiError> {
    let cookie = req.cookie(SESSION_COOKIE).ok_or(ApiError::NotAuthenticated)?;
    let session = Session::resolve(pool, cookie.value())
        .await?
        .ok_or(ApiError::NotAuthenticated)?;
    User::find_by_id(pool, session.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))
}
