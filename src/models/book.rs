//! Book model and related types

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::{author::AuthorSummary, merge_field, Author, PartialUpdate};

/// Book record, keyed by its ISBN
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub isbn: String,
    pub title: String,
    pub description: String,
    /// Image reference (URL or file name)
    pub image: String,
    /// Owning author
    pub author: AuthorSummary,
}

impl Book {
    /// Build the record stored at `isbn` from an upsert payload bound to a
    /// resolved author
    pub fn from_summary(isbn: &str, summary: BookSummary, author: &Author) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: summary.title,
            description: summary.description,
            image: summary.image,
            author: AuthorSummary {
                id: summary.author.id,
                name: Some(author.name.clone()),
                image: Some(author.image.clone()),
            },
        }
    }
}

/// Create-or-replace book request. The ISBN is taken from the request path.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct BookSummary {
    pub title: String,
    pub description: String,
    pub image: String,
    pub author: AuthorSummary,
}

/// Partial update book request.
///
/// Carries no author reference: ownership only changes through
/// create-or-replace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct UpdateBook {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl PartialUpdate<Book> for UpdateBook {
    fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.image.is_none()
    }

    fn apply_to(self, mut book: Book) -> Book {
        merge_field(&mut book.title, self.title);
        merge_field(&mut book.description, self.description);
        merge_field(&mut book.image, self.image);
        book
    }
}

/// Book list query parameters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    /// Only return books owned by this author
    pub author: Option<i64>,
}
