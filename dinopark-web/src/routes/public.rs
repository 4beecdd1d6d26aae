// Public routes (no authentication in this application)
use crate::app::AppState;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

use crate::handlers::dinosaurs;
use crate::version;

/// Create public routes router
pub fn create_public_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(dinosaurs::index))
        .route("/dinosaurs/{id}", get(dinosaurs::show))
        .route("/version", get(get_version))
}

/// Get version information (public endpoint)
async fn get_version() -> axum::Json<version::VersionInfo> {
    axum::Json(version::get_version_info())
}
