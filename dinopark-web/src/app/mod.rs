// Application state and assembly
pub mod state;

pub use state::AppState;

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::routes::create_router;

/// Router with request tracing applied to all routes and state attached.
pub fn build_app(state: Arc<AppState>) -> Router {
    create_router()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
