use actix_web::{web, HttpRequest, HttpResponse};
use sqlx::SqlitePool;

use crate::errors::ApiError;
use crate::models::session::resolve_user;
use crate::models::user::User;

// Session-gated: usernames are not public data.
pub async fn get_users(
    pool: web::Data<SqlitePool>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    resolve_user(pool.get_ref(), &req).await?;

    let users = User::list_public(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(users))
}
