//! Book catalog service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult, ErrorCode},
    models::{Book, BookSummary, PartialUpdate, UpdateBook},
    repository::{AuthorStore, BookStore},
};

#[derive(Clone)]
pub struct BooksService {
    books: Arc<dyn BookStore>,
    authors: Arc<dyn AuthorStore>,
}

impl BooksService {
    pub fn new(books: Arc<dyn BookStore>, authors: Arc<dyn AuthorStore>) -> Self {
        Self { books, authors }
    }

    /// Create the book at `isbn` or fully replace it.
    ///
    /// Returns the stored book and `true` when it did not exist before. The
    /// referenced author must exist; nothing is written otherwise.
    pub async fn create_or_update(&self, isbn: &str, summary: BookSummary) -> AppResult<(Book, bool)> {
        let author_id = summary.author.id;
        let author = self.authors.get(author_id).await?.ok_or_else(|| {
            AppError::InvalidInput(
                ErrorCode::UnknownAuthor,
                format!("Unknown author {} for book {}", author_id, isbn),
            )
        })?;

        let created = !self.books.exists(isbn).await?;
        let book = self.books.save(Book::from_summary(isbn, summary, &author)).await?;
        Ok((book, created))
    }

    /// All books, or only those owned by `author_id`
    pub async fn list(&self, author_id: Option<i64>) -> AppResult<Vec<Book>> {
        match author_id {
            Some(author_id) => self.books.list_by_author(author_id).await,
            None => self.books.list_all().await,
        }
    }

    /// Book at `isbn`, `None` when absent
    pub async fn get(&self, isbn: &str) -> AppResult<Option<Book>> {
        self.books.get(isbn).await
    }

    /// Overwrite only the title, description or image fields present in `update`.
    ///
    /// The book's author must still exist; a book left behind by an author
    /// delete is not written.
    pub async fn partial_update(&self, isbn: &str, update: UpdateBook) -> AppResult<Book> {
        let existing = self.books.get(isbn).await?.ok_or_else(|| {
            AppError::InvalidState(ErrorCode::NoSuchBook, format!("Book {} does not exist", isbn))
        })?;
        if update.is_empty() {
            return Ok(existing);
        }

        let author_id = existing.author.id;
        if !self.authors.exists(author_id).await? {
            return Err(AppError::InvalidInput(
                ErrorCode::UnknownAuthor,
                format!("Unknown author {} for book {}", author_id, isbn),
            ));
        }

        self.books.save(update.apply_to(existing)).await
    }

    pub async fn delete(&self, isbn: &str) -> AppResult<()> {
        self.books.delete(isbn).await
    }
}
