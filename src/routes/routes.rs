use actix_web::web;

use super::auth::auth_handlers;
use super::tasks::task_handlers;
use super::users::user_handlers;

pub fn auth_configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/register", web::post().to(auth_handlers::register))
        .route("/login", web::post().to(auth_handlers::login))
        .route("/logout", web::get().to(auth_handlers::logout));
}

pub fn task_configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/tasks", web::get().to(task_handlers::get_tasks))
        .route("/tasks", web::post().to(task_handlers::add_task))
        .route("/tasks/{id}", web::put().to(task_handlers::update_task))
        .route("/tasks/{id}", web::delete().to(task_handlers::delete_task))
        .route("/updateOrder", web::put().to(task_handlers::update_order));
}

pub fn user_configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/users", web::get().to(user_handlers::get_users));
}
