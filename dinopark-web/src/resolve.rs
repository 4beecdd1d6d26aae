//! Turns the `{id}` route parameter into a loaded entity before a handler runs.
//!
//! ```rust,ignore
//! async fn show(ResolvedDinosaur(dino): ResolvedDinosaur) -> impl IntoResponse {
//!     dino.name
//! }
//! ```

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use dinopark_common::{Dinosaur, DinosaurId};
use std::sync::Arc;

use crate::app::AppState;
use crate::error::AppError;
use crate::repository::DinosaurRepository;

/// A dinosaur looked up from the request path. Extraction fails with
/// `AppError::NotFound` when the id is malformed or matches no record.
#[derive(Debug, Clone)]
pub struct ResolvedDinosaur(pub Dinosaur);

impl FromRequestParts<Arc<AppState>> for ResolvedDinosaur {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let Path(raw_id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::not_found("dinosaur", ""))?;

        resolve_dinosaur(state.dinosaurs.as_ref(), &raw_id)
            .await
            .map(ResolvedDinosaur)
    }
}

/// Primary-key lookup with the not-found branch made explicit.
pub async fn resolve_dinosaur(
    repo: &dyn DinosaurRepository,
    raw_id: &str,
) -> Result<Dinosaur, AppError> {
    let Ok(id) = raw_id.trim().parse::<DinosaurId>() else {
        return Err(AppError::not_found("dinosaur", raw_id));
    };

    match repo.find(id).await? {
        Some(dino) => Ok(dino),
        None => {
            tracing::debug!(id, "dinosaur not found");
            Err(AppError::not_found("dinosaur", raw_id))
        }
    }
}
