// Library entry point for tests and external usage

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod repository;
pub mod resolve;
pub mod routes;
pub mod setup;
pub mod version;
pub mod views;

// Re-export commonly used types
pub use app::AppState;
pub use error::AppError;
