//! Catalog services
//!
//! The services apply the catalog rules (existence checks, merges,
//! created-vs-replaced) over the record stores and report outcomes through
//! [`AppResult`](crate::error::AppResult). Read-check-then-write sequences are
//! not isolated from concurrent writers: the last write wins.

pub mod authors;
pub mod books;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub authors: authors::AuthorsService,
    pub books: books::BooksService,
}

impl Services {
    /// Create all services over the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            authors: authors::AuthorsService::new(repository.authors.clone()),
            books: books::BooksService::new(repository.books, repository.authors),
        }
    }
}
