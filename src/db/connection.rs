//! Database connection management

use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    config::DatabaseConfig,
    error::{AppError, AppResult},
};

/// Create a new database connection pool
pub async fn create_pool(config: &DatabaseConfig) -> AppResult<PgPool> {
    let url = config
        .url
        .as_deref()
        .ok_or_else(|| AppError::Configuration("DATABASE_URL is not set".to_string()))?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(url)
        .await?;

    Ok(pool)
}

/// Test database connection
pub async fn test_connection(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
