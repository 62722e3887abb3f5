use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{App, HttpServer};
use dotenv::dotenv;
use std::env;

use todo_backend::{configure_app, db};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    // Credentialed CORS forbids wildcards, so the frontend origin has to be
    // spelled out.
    let allowed_origin = env::var("ALLOWED_ORIGIN").expect("ALLOWED_ORIGIN must be set");
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let pool = db::connect(&database_url)
        .await
        .expect("Failed to create pool");
    db::init_schema(&pool)
        .await
        .expect("Failed to initialize database schema");

    println!("Server running at http://{}", bind_addr);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&allowed_origin)
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .supports_credentials();

        App::new()
            .wrap(cors)
            .configure(configure_app(pool.clone()))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
