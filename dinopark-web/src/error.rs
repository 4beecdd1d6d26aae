use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use dinopark_common::RepositoryError;
use thiserror::Error;

use crate::views::RenderError;

const NOT_FOUND_PAGE: &str = "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"UTF-8\"><title>Not Found</title></head>\n<body><h1>404 Not Found</h1><p>No such dinosaur in the park.</p><p><a href=\"/\">All dinosaurs</a></p></body></html>\n";
const ERROR_PAGE: &str = "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"UTF-8\"><title>Server Error</title></head>\n<body><h1>500 Internal Server Error</h1></body></html>\n";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{entity} `{id}` not found")]
    NotFound { entity: &'static str, id: String },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl AppError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Repository(_) | AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Details stay in the log; the page body is fixed.
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            (status, Html(ERROR_PAGE)).into_response()
        } else {
            tracing::debug!(error = %self, "request rejected");
            (status, Html(NOT_FOUND_PAGE)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let resp = AppError::not_found("dinosaur", "99").into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            resp.headers()[axum::http::header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
    }

    #[test]
    fn repository_failure_maps_to_500() {
        let err = AppError::from(RepositoryError::Unavailable("connection refused".into()));
        assert_eq!(err.to_string(), "store unavailable: connection refused");
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn render_failure_maps_to_500() {
        let err = AppError::from(RenderError {
            template: "dinosaurs/index.html".into(),
            source: minijinja::Error::new(minijinja::ErrorKind::TemplateNotFound, "missing"),
        });
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
