//! Record stores for authors and books
//!
//! The catalog services only see the [`AuthorStore`] and [`BookStore`]
//! traits; [`Repository`] bundles one implementation of each.

pub mod authors;
pub mod books;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{Author, Book},
};

/// Keyed storage for authors
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorStore: Send + Sync {
    async fn get(&self, id: i64) -> AppResult<Option<Author>>;

    /// Insert when `author.id` is absent (the store assigns the key),
    /// otherwise write the record at `author.id`
    async fn save(&self, author: Author) -> AppResult<Author>;

    async fn exists(&self, id: i64) -> AppResult<bool>;

    /// Remove the record; a missing key is not an error
    async fn delete(&self, id: i64) -> AppResult<()>;

    async fn list_all(&self) -> AppResult<Vec<Author>>;
}

/// Keyed storage for books, keyed by ISBN
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    async fn get(&self, isbn: &str) -> AppResult<Option<Book>>;

    /// Insert or fully replace the record at `book.isbn`
    async fn save(&self, book: Book) -> AppResult<Book>;

    async fn exists(&self, isbn: &str) -> AppResult<bool>;

    /// Remove the record; a missing key is not an error
    async fn delete(&self, isbn: &str) -> AppResult<()>;

    async fn list_all(&self) -> AppResult<Vec<Book>>;

    async fn list_by_author(&self, author_id: i64) -> AppResult<Vec<Book>>;
}

/// Main repository struct holding one store per entity
#[derive(Clone)]
pub struct Repository {
    pub authors: Arc<dyn AuthorStore>,
    pub books: Arc<dyn BookStore>,
}

impl Repository {
    /// Create a repository backed by the given database pool
    pub fn postgres(pool: Pool<Postgres>) -> Self {
        Self {
            authors: Arc::new(authors::AuthorsRepository::new(pool.clone())),
            books: Arc::new(books::BooksRepository::new(pool)),
        }
    }

    /// Create a repository backed by process-local maps
    pub fn in_memory() -> Self {
        let authors = Arc::new(memory::InMemoryAuthorStore::new());
        Self {
            books: Arc::new(memory::InMemoryBookStore::new(authors.clone())),
            authors,
        }
    }
}
