use actix_web::{web, HttpRequest, HttpResponse};
use log::info;
use sqlx::SqlitePool;

use crate::errors::ApiError;
use crate::models::session::resolve_user;
use crate::models::task::{NewTask, Task, TaskChanges};
use crate::routes::auth::auth_models::MessageResponse;
use super::task_models::{CreateTaskRequest, UpdateTaskRequest};

pub async fn get_tasks(
    pool: web::Data<SqlitePool>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(pool.get_ref(), &req).await?;

    let tasks = Task::list(pool.get_ref(), user.id).await?;
    info!("Tasks retrieved for user '{}'", user.username);
    Ok(HttpResponse::Ok().json(tasks))
}

pub async fn add_task(
    pool: web::Data<SqlitePool>,
    req: HttpRequest,
    body: web::Json<CreateTaskRequest>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(pool.get_ref(), &req).await?;

    let body = body.into_inner();
    let title = body
        .task
        .ok_or_else(|| ApiError::InvalidInput("Invalid task data".into()))?;
    let new = NewTask {
        task: title,
        description: body.description.unwrap_or_default(),
        priority: body.priority.unwrap_or_default(),
        status: body.status.unwrap_or(true),
        task_date: body.task_date.unwrap_or_default(),
    };

    let task = Task::create(pool.get_ref(), user.id, new).await?;
    info!("Task created for user '{}'", user.username);
    Ok(HttpResponse::Created().json(task))
}

pub async fn update_task(
    pool: web::Data<SqlitePool>,
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<UpdateTaskRequest>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(pool.get_ref(), &req).await?;
    let task_id = path.into_inner();

    let body = body.into_inner();
    let changes = TaskChanges {
        task: body.task,
        description: body.description,
        priority: body.priority,
        status: body.status,
        task_date: body.task_date,
    };

    let task = Task::update(pool.get_ref(), task_id, user.id, changes).await?;
    info!("Task '{}' updated for user '{}'", task_id, user.username);
    Ok(HttpResponse::Ok().json(task))
}

pub async fn delete_task(
    pool: web::Data<SqlitePool>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(pool.get_ref(), &req).await?;
    let task_id = path.into_inner();

    Task::delete(pool.get_ref(), task_id, user.id).await?;
    info!("Task '{}' deleted for user '{}'", task_id, user.username);
    Ok(HttpResponse::NoContent().finish())
}

// Accepted for client compatibility; ordering is not persisted, so the
// body is ignored and the call has no effect.
pub async fn update_order(
    pool: web::Data<SqlitePool>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let user = resolve_user(pool.get_ref(), &req).await?;

    info!("Order update acknowledged for user '{}'", user.username);
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Order updated".into(),
    }))
}
