//! Books repository for database operations.
//!
//! Reads join the owning author so returned books carry its current name and
//! image. A book whose author row is gone still comes back, with a bare
//! reference.

use async_trait::async_trait;
use sqlx::{postgres::PgRow, Pool, Postgres, Row};

use super::BookStore;
use crate::{
    error::AppResult,
    models::{AuthorSummary, Book},
};

const SELECT_BOOKS: &str = r#"
    SELECT b.isbn, b.title, b.description, b.image, b.author_id,
           a.name AS author_name, a.image AS author_image
    FROM books b
    LEFT JOIN authors a ON a.id = b.author_id
"#;

fn book_from_row(row: &PgRow) -> Book {
    Book {
        isbn: row.get("isbn"),
        title: row.get("title"),
        description: row.get("description"),
        image: row.get("image"),
        author: AuthorSummary {
            id: row.get("author_id"),
            name: row.get("author_name"),
            image: row.get("author_image"),
        },
    }
}

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for BooksRepository {
    async fn get(&self, isbn: &str) -> AppResult<Option<Book>> {
        let row = sqlx::query(&format!("{} WHERE b.isbn = $1", SELECT_BOOKS))
            .bind(isbn)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(book_from_row))
    }

    async fn save(&self, book: Book) -> AppResult<Book> {
        let row = sqlx::query(
            r#"
            WITH saved AS (
                INSERT INTO books (isbn, title, description, image, author_id)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (isbn) DO UPDATE SET
                    title = EXCLUDED.title,
                    description = EXCLUDED.description,
                    image = EXCLUDED.image,
                    author_id = EXCLUDED.author_id
                RETURNING isbn, title, description, image, author_id
            )
            SELECT s.isbn, s.title, s.description, s.image, s.author_id,
                   a.name AS author_name, a.image AS author_image
            FROM saved s
            LEFT JOIN authors a ON a.id = s.author_id
            "#,
        )
        .bind(&book.isbn)
        .bind(&book.title)
        .bind(&book.description)
        .bind(&book.image)
        .bind(book.author.id)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Saved book isbn={} author_id={}", book.isbn, book.author.id);
        Ok(book_from_row(&row))
    }

    async fn exists(&self, isbn: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE isbn = $1)")
            .bind(isbn)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn delete(&self, isbn: &str) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE isbn = $1")
            .bind(isbn)
            .execute(&self.pool)
            .await?;
        tracing::debug!("Deleted book isbn={} ({} rows)", isbn, result.rows_affected());
        Ok(())
    }

    async fn list_all(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query(&format!("{} ORDER BY b.isbn", SELECT_BOOKS))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.iter().map(book_from_row).collect())
    }

    async fn list_by_author(&self, author_id: i64) -> AppResult<Vec<Book>> {
        let rows = sqlx::query(&format!("{} WHERE b.author_id = $1 ORDER BY b.isbn", SELECT_BOOKS))
            .bind(author_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.iter().map(book_from_row).collect())
    }
}
