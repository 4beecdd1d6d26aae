use async_trait::async_trait;
use dinopark_common::{Dinosaur, DinosaurId, RepositoryError};
use sqlx::{Pool, Postgres};

use super::DinosaurRepository;

pub struct PgDinosaurRepository {
    db: Pool<Postgres>,
}

impl PgDinosaurRepository {
    pub fn new(db: Pool<Postgres>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DinosaurRepository for PgDinosaurRepository {
    async fn find_all(&self) -> Result<Vec<Dinosaur>, RepositoryError> {
        let rows = sqlx::query_as::<Postgres, Dinosaur>(
            r#"
            SELECT id, name, genus, length_m, is_carnivorous, created_at
            FROM dinosaurs
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn find(&self, id: DinosaurId) -> Result<Option<Dinosaur>, RepositoryError> {
        let row = sqlx::query_as::<Postgres, Dinosaur>(
            r#"
            SELECT id, name, genus, length_m, is_carnivorous, created_at
            FROM dinosaurs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(row)
    }
}
