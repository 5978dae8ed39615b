//! Authors repository for database operations

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::AuthorStore;
use crate::{error::AppResult, models::Author};

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Postgres>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorStore for AuthorsRepository {
    async fn get(&self, id: i64) -> AppResult<Option<Author>> {
        let author = sqlx::query_as::<_, Author>(
            "SELECT id, name, age, description, image FROM authors WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(author)
    }

    async fn save(&self, author: Author) -> AppResult<Author> {
        let saved = match author.id {
            None => {
                sqlx::query_as::<_, Author>(
                    r#"
                    INSERT INTO authors (name, age, description, image)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id, name, age, description, image
                    "#,
                )
                .bind(&author.name)
                .bind(author.age)
                .bind(&author.description)
                .bind(&author.image)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => {
                sqlx::query_as::<_, Author>(
                    r#"
                    INSERT INTO authors (id, name, age, description, image)
                    VALUES ($1, $2, $3, $4, $5)
                    ON CONFLICT (id) DO UPDATE SET
                        name = EXCLUDED.name,
                        age = EXCLUDED.age,
                        description = EXCLUDED.description,
                        image = EXCLUDED.image
                    RETURNING id, name, age, description, image
                    "#,
                )
                .bind(id)
                .bind(&author.name)
                .bind(author.age)
                .bind(&author.description)
                .bind(&author.image)
                .fetch_one(&self.pool)
                .await?
            }
        };

        tracing::debug!("Saved author id={:?}", saved.id);
        Ok(saved)
    }

    async fn exists(&self, id: i64) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM authors WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        tracing::debug!("Deleted author id={} ({} rows)", id, result.rows_affected());
        Ok(())
    }

    async fn list_all(&self) -> AppResult<Vec<Author>> {
        let rows = sqlx::query_as::<_, Author>(
            "SELECT id, name, age, description, image FROM authors ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
