use axum::{extract::State, response::Html};
use serde_json::json;
use std::sync::Arc;

use crate::app::state::AppState;
use crate::error::AppError;
use crate::resolve::ResolvedDinosaur;
use crate::views;

/// `GET /` - every stored dinosaur, rendered as a list.
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let dinos = state.dinosaurs.find_all().await?;
    tracing::debug!(count = dinos.len(), "rendering dinosaur list");

    let html = state
        .views
        .render(views::DINOSAUR_INDEX, &json!({ "dinos": dinos }))?;
    Ok(Html(html))
}

/// `GET /dinosaurs/{id}` - a single dinosaur. Unknown ids never reach this
/// handler; the extractor rejects them with a 404.
pub async fn show(
    State(state): State<Arc<AppState>>,
    ResolvedDinosaur(dino): ResolvedDinosaur,
) -> Result<Html<String>, AppError> {
    let html = state
        .views
        .render(views::DINOSAUR_SHOW, &json!({ "dino": dino }))?;
    Ok(Html(html))
}
