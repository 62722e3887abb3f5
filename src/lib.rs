pub mod auth;
pub mod db;
pub mod errors;
pub mod models;
pub mod routes;

use actix_web::{web, HttpResponse};
use sqlx::SqlitePool;

use crate::errors::ApiError;
use crate::routes::auth::auth_models::MessageResponse;

// Greeting doubles as a liveness probe: it touches the database, so a
// broken connection shows up here as a 500.
async fn index(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let user_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool.get_ref())
        .await?;
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: format!("Database is connected, {} users found.", user_count),
    }))
}

/// Everything the server mounts except middleware, so `main` and the
/// integration tests build the exact same application.
pub fn configure_app(pool: SqlitePool) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(pool))
            .app_data(errors::json_config())
            .route("/", web::get().to(index))
            .configure(routes::routes::auth_configure)
            .configure(routes::routes::task_configure)
            .configure(routes::routes::user_configure);
    }
}
