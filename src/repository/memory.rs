//! In-memory record stores.
//!
//! Same observable contract as the Postgres repositories: sequential author
//! keys starting at 1, books listed by ISBN, book reads resolving the owning
//! author's name and image when it still exists.

use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{AuthorStore, BookStore};
use crate::{
    error::AppResult,
    models::{Author, AuthorSummary, Book},
};

#[derive(Default)]
struct AuthorTable {
    rows: BTreeMap<i64, Author>,
    last_id: i64,
}

#[derive(Default)]
pub struct InMemoryAuthorStore {
    table: RwLock<AuthorTable>,
}

impl InMemoryAuthorStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuthorStore for InMemoryAuthorStore {
    async fn get(&self, id: i64) -> AppResult<Option<Author>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn save(&self, author: Author) -> AppResult<Author> {
        let mut table = self.table.write().await;
        let id = match author.id {
            Some(id) => id,
            None => table.last_id + 1,
        };
        table.last_id = table.last_id.max(id);

        let saved = author.with_id(id);
        table.rows.insert(id, saved.clone());
        Ok(saved)
    }

    async fn exists(&self, id: i64) -> AppResult<bool> {
        Ok(self.table.read().await.rows.contains_key(&id))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.table.write().await.rows.remove(&id);
        Ok(())
    }

    async fn list_all(&self) -> AppResult<Vec<Author>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }
}

/// Book rows keep only the author key, like the `books` table
#[derive(Clone)]
struct BookRow {
    title: String,
    description: String,
    image: String,
    author_id: i64,
}

pub struct InMemoryBookStore {
    rows: RwLock<BTreeMap<String, BookRow>>,
    authors: Arc<InMemoryAuthorStore>,
}

impl InMemoryBookStore {
    pub fn new(authors: Arc<InMemoryAuthorStore>) -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            authors,
        }
    }

    async fn resolve(&self, isbn: &str, row: &BookRow) -> Book {
        let author = self.authors.table.read().await.rows.get(&row.author_id).cloned();
        Book {
            isbn: isbn.to_string(),
            title: row.title.clone(),
            description: row.description.clone(),
            image: row.image.clone(),
            author: AuthorSummary {
                id: row.author_id,
                name: author.as_ref().map(|a| a.name.clone()),
                image: author.map(|a| a.image),
            },
        }
    }

    async fn books_matching<F>(&self, keep: F) -> Vec<Book>
    where
        F: Fn(&BookRow) -> bool,
    {
        let rows: Vec<(String, BookRow)> = self
            .rows
            .read()
            .await
            .iter()
            .filter(|(_, row)| keep(row))
            .map(|(isbn, row)| (isbn.clone(), row.clone()))
            .collect();

        let mut books = Vec::with_capacity(rows.len());
        for (isbn, row) in &rows {
            books.push(self.resolve(isbn, row).await);
        }
        books
    }
}

#[async_trait]
impl BookStore for InMemoryBookStore {
    async fn get(&self, isbn: &str) -> AppResult<Option<Book>> {
        let row = self.rows.read().await.get(isbn).cloned();
        Ok(match row {
            Some(row) => Some(self.resolve(isbn, &row).await),
            None => None,
        })
    }

    async fn save(&self, book: Book) -> AppResult<Book> {
        let row = BookRow {
            title: book.title,
            description: book.description,
            image: book.image,
            author_id: book.author.id,
        };
        self.rows.write().await.insert(book.isbn.clone(), row.clone());
        Ok(self.resolve(&book.isbn, &row).await)
    }

    async fn exists(&self, isbn: &str) -> AppResult<bool> {
        Ok(self.rows.read().await.contains_key(isbn))
    }

    async fn delete(&self, isbn: &str) -> AppResult<()> {
        self.rows.write().await.remove(isbn);
        Ok(())
    }

    async fn list_all(&self) -> AppResult<Vec<Book>> {
        Ok(self.books_matching(|_| true).await)
    }

    async fn list_by_author(&self, author_id: i64) -> AppResult<Vec<Book>> {
        Ok(self.books_matching(|row| row.author_id == author_id).await)
    }
}
