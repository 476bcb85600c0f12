use crate::config::get_config;
use crate::error::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;

/// Open the configured database file, creating it if absent.
pub async fn create_pool() -> Result<SqlitePool> {
    let config = get_config();
    connect(&config.database_path).await
}

/// Open a specific database file. Foreign keys are enabled per connection so
/// cascade deletes actually fire (SQLite defaults them off).
pub async fn connect(path: &Path) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect_with(options)
        .await?;
    Ok(pool)
}
