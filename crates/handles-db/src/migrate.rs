use sqlx::migrate::MigrateError;
use sqlx::PgPool;
use tracing::info;

/// Run all database migrations (versioned, tracked in `_sqlx_migrations` table)
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    info!("Running database migrations...");
    sqlx::migrate!().run(pool).await?;
    info!("Database migrations completed");
    Ok(())
}
