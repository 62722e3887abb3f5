use sqlx::SqlitePool;
use tempfile::TempDir;

use todo_backend::db;

/// Fresh file-backed database per test. The TempDir must stay alive for as
/// long as the pool is used.
pub async fn test_pool() -> (SqlitePool, TempDir) {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");
    let pool = db::connect(&format!("sqlite://{}", db_path.display()))
        .await
        .unwrap();
    db::init_schema(&pool).await.unwrap();
    (pool, dir)
}
