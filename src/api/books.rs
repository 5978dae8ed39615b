//! Book endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::{AppError, AppResult, ErrorCode},
    models::{Book, BookQuery, BookSummary, UpdateBook},
};

/// Create a book at the given ISBN or replace it
#[utoipa::path(
    put,
    path = "/books/{isbn}",
    tag = "books",
    params(("isbn" = String, Path, description = "Book ISBN")),
    request_body = BookSummary,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 200, description = "Book replaced", body = Book),
        (status = 400, description = "Referenced author does not exist", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_or_update_book(
    State(state): State<crate::AppState>,
    Path(isbn): Path<String>,
    Json(summary): Json<BookSummary>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let (book, created) = state.services.books.create_or_update(&isbn, summary).await?;
    let status = if created { StatusCode::CREATED } else { StatusCode::OK };
    Ok((status, Json(book)))
}

/// List books, optionally only those of one author
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "List of books", body = Vec<Book>)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.books.list(query.author).await?;
    Ok(Json(books))
}

/// Get book by ISBN
#[utoipa::path(
    get,
    path = "/books/{isbn}",
    tag = "books",
    params(("isbn" = String, Path, description = "Book ISBN")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(isbn): Path<String>,
) -> AppResult<Json<Book>> {
    match state.services.books.get(&isbn).await? {
        Some(book) => Ok(Json(book)),
        None => Err(AppError::NotFound(ErrorCode::NoSuchBook, format!("Book {} not found", isbn))),
    }
}

/// Update the supplied fields of an existing book
#[utoipa::path(
    patch,
    path = "/books/{isbn}",
    tag = "books",
    params(("isbn" = String, Path, description = "Book ISBN")),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Book does not exist", body = crate::error::ErrorResponse)
    )
)]
pub async fn partial_update_book(
    State(state): State<crate::AppState>,
    Path(isbn): Path<String>,
    Json(update): Json<UpdateBook>,
) -> AppResult<Json<Book>> {
    let updated = state.services.books.partial_update(&isbn, update).await?;
    Ok(Json(updated))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{isbn}",
    tag = "books",
    params(("isbn" = String, Path, description = "Book ISBN")),
    responses(
        (status = 204, description = "Book deleted (or already absent)")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(isbn): Path<String>,
) -> AppResult<StatusCode> {
    state.services.books.delete(&isbn).await?;
    Ok(StatusCode::NO_CONTENT)
}
