use sqlx::Pool;
use sqlx::Postgres;

/// Run database migrations and verify the dinosaurs table exists
pub async fn run_migrations(pool: &Pool<Postgres>) -> Result<(), sqlx::migrate::MigrateError> {
    if let Err(e) = sqlx::migrate!("../sqlx-migrations").run(pool).await {
        // Migrations may have been applied by hand; only the table matters.
        tracing::warn!(error = %e, "migration error, checking schema");

        let table_exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM information_schema.tables WHERE table_name = 'dinosaurs')",
        )
        .fetch_one(pool)
        .await
        .unwrap_or(false);

        if !table_exists {
            tracing::error!("table 'dinosaurs' does not exist - migrations must be applied");
            return Err(e);
        }

        tracing::info!("table 'dinosaurs' exists - continuing despite migration error");
    }

    Ok(())
}
