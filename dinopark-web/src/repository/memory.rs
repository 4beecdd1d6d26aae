use async_trait::async_trait;
use dinopark_common::{Dinosaur, DinosaurId, RepositoryError};
use std::collections::BTreeMap;
use std::sync::RwLock;

use super::DinosaurRepository;

/// Store backed by a map keyed on primary key, iterated in ascending id order.
#[derive(Default)]
pub struct InMemoryDinosaurRepository {
    rows: RwLock<BTreeMap<DinosaurId, Dinosaur>>,
}

impl InMemoryDinosaurRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later records replace earlier ones with the same id.
    pub fn with_records(records: impl IntoIterator<Item = Dinosaur>) -> Self {
        let rows = records.into_iter().map(|d| (d.id, d)).collect();
        Self {
            rows: RwLock::new(rows),
        }
    }

    pub fn insert(&self, dino: Dinosaur) -> Result<(), RepositoryError> {
        let mut rows = self
            .rows
            .write()
            .map_err(|e| RepositoryError::Unavailable(e.to_string()))?;
        rows.insert(dino.id, dino);
        Ok(())
    }
}

#[async_trait]
impl DinosaurRepository for InMemoryDinosaurRepository {
    async fn find_all(&self) -> Result<Vec<Dinosaur>, RepositoryError> {
        let rows = self
            .rows
            .read()
            .map_err(|e| RepositoryError::Unavailable(e.to_string()))?;
        Ok(rows.values().cloned().collect())
    }

    async fn find(&self, id: DinosaurId) -> Result<Option<Dinosaur>, RepositoryError> {
        let rows = self
            .rows
            .read()
            .map_err(|e| RepositoryError::Unavailable(e.to_string()))?;
        Ok(rows.get(&id).cloned())
    }
}
