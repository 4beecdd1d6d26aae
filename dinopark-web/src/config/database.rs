use sqlx::{postgres::PgPoolOptions, Pool, Postgres};

/// Create and configure database connection pool
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<Pool<Postgres>, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}
