use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use dinopark_web::app::{self, AppState};
use dinopark_web::config::{database::create_pool, Settings};
use dinopark_web::repository::PgDinosaurRepository;
use dinopark_web::setup::{maybe_seed_dinosaurs, run_migrations};
use dinopark_web::views::TemplateRenderer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::from_env()?;

    let pool = create_pool(&settings.database_url, settings.database_max_connections)
        .await
        .context("failed to connect to Postgres")?;

    run_migrations(&pool).await.context("failed to run migrations")?;
    maybe_seed_dinosaurs(&pool, settings.auto_seed, &settings.seed_path).await;

    let views = TemplateRenderer::new().context("failed to load templates")?;
    let state = AppState::new(Arc::new(PgDinosaurRepository::new(pool)), Arc::new(views));
    let app = app::build_app(state);

    let listener = tokio::net::TcpListener::bind(settings.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", settings.bind_addr))?;
    tracing::info!(addr = %settings.bind_addr, "dinopark listening");
    axum::serve(listener, app).await?;

    Ok(())
}
