use actix_web::cookie::{Cookie, SameSite};
use actix_web::{web, HttpRequest, HttpResponse};
use log::{info, warn};
use sqlx::SqlitePool;

use crate::auth::{hash_password, verify_password};
use crate::errors::ApiError;
use crate::models::session::{Session, SESSION_COOKIE};
use crate::models::user::User;
use super::auth_models::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};

// The frontend lives on a different origin, so the cookie must be allowed
// to travel cross-site: SameSite=None requires Secure.
fn session_cookie(value: String) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, value)
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::None)
        .finish()
}

fn clear_session_cookie() -> Cookie<'static> {
    let mut cookie = session_cookie(String::new());
    cookie.make_removal();
    cookie
}

// register user to DB
pub async fn register(
    pool: web::Data<SqlitePool>,
    req: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    if req.username.is_empty() || req.password.is_empty() {
        return Err(ApiError::InvalidInput("Invalid request data".into()));
    }

    info!("Received request to register user: {}", req.username);
    let password_hash = hash_password(&req.password)?;
    User::create(pool.get_ref(), &req.username, &password_hash).await?;

    info!("User '{}' registered successfully", req.username);
    Ok(HttpResponse::Created().json(MessageResponse {
        message: "User registered successfully".into(),
    }))
}

// login logic
pub async fn login(
    pool: web::Data<SqlitePool>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    if req.username.is_empty() || req.password.is_empty() {
        return Err(ApiError::InvalidInput("Invalid request data".into()));
    }

    info!("Received login request for user: {}", req.username);

    // The log may say which step failed; the response never does.
    let user = match User::find_by_username(pool.get_ref(), &req.username).await? {
        Some(user) => user,
        None => {
            warn!("User '{}' not found", req.username);
            return Err(ApiError::Authentication);
        }
    };

    if !verify_password(&req.password, &user.password_hash)? {
        warn!("Incorrect password for '{}'", req.username);
        return Err(ApiError::Authentication);
    }

    let session = Session::establish(pool.get_ref(), user.id).await?;

    info!("User '{}' logged in successfully", user.username);
    Ok(HttpResponse::Ok()
        .cookie(session_cookie(session.session_id))
        .json(LoginResponse {
            message: "Logged in successfully".into(),
            user_id: user.id,
        }))
}

// Logout is idempotent: with no cookie, or a token that is already gone,
// it still reports success and expires the cookie client-side.
pub async fn logout(
    pool: web::Data<SqlitePool>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    if let Some(cookie) = req.cookie(SESSION_COOKIE) {
        Session::terminate(pool.get_ref(), cookie.value()).await?;
        info!("Session terminated on logout");
    }

    Ok(HttpResponse::Ok()
        .cookie(clear_session_cookie())
        .json(MessageResponse {
            message: "Logged out successfully".into(),
        }))
}
