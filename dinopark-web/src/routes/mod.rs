// Routes module - Centralizes all route definitions
pub mod public;

use crate::app::AppState;
use axum::Router;
use std::sync::Arc;

/// Route names, as referenced from templates through `path()`.
pub const DINOSAUR_LIST: &str = "dinosaur_list";
pub const DINOSAUR_SHOW: &str = "dinosaur_show";

/// Build the main application router
pub fn create_router() -> Router<Arc<AppState>> {
    Router::new().merge(public::create_public_routes())
}

/// Generate the URL of a named route. `None` for unknown names or a
/// parameter mismatch.
pub fn url_for(name: &str, id: Option<i64>) -> Option<String> {
    match (name, id) {
        (DINOSAUR_LIST, None) => Some("/".to_string()),
        (DINOSAUR_SHOW, Some(id)) => Some(format!("/dinosaurs/{id}")),
        _ => None,
    }
}
