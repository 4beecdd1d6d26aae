// Persistence collaborators for the Dinosaur entity
pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use dinopark_common::{Dinosaur, DinosaurId, RepositoryError};

pub use memory::InMemoryDinosaurRepository;
pub use postgres::PgDinosaurRepository;

/// Read access to stored dinosaurs.
#[async_trait]
pub trait DinosaurRepository: Send + Sync {
    /// Every stored record, in the store's default order.
    async fn find_all(&self) -> Result<Vec<Dinosaur>, RepositoryError>;

    /// Primary-key lookup. `Ok(None)` when no record matches.
    async fn find(&self, id: DinosaurId) -> Result<Option<Dinosaur>, RepositoryError>;
}
