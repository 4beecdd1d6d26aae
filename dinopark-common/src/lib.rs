use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type DinosaurId = i32;

// --- Entities (SQLx Mapped) ---

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, sqlx::FromRow)]
pub struct Dinosaur {
    pub id: DinosaurId,
    pub name: String,
    pub genus: String,
    pub length_m: i32,
    pub is_carnivorous: bool,
    pub created_at: DateTime<Utc>,
}

impl Dinosaur {
    /// In-memory construction, used by fixtures and the in-memory store.
    pub fn new(id: DinosaurId, name: impl Into<String>, genus: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            genus: genus.into(),
            length_m: 0,
            is_carnivorous: false,
            created_at: Utc::now(),
        }
    }

    pub fn with_length(mut self, length_m: i32) -> Self {
        self.length_m = length_m;
        self
    }

    pub fn carnivorous(mut self, is_carnivorous: bool) -> Self {
        self.is_carnivorous = is_carnivorous;
        self
    }
}

// --- Errors ---

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
