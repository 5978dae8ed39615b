//! Author endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult, ErrorCode},
    models::{Author, UpdateAuthor},
};

/// Create a new author
#[utoipa::path(
    post,
    path = "/authors",
    tag = "authors",
    request_body = Author,
    responses(
        (status = 201, description = "Author created", body = Author),
        (status = 400, description = "Author already has an id or is invalid", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_author(
    State(state): State<crate::AppState>,
    Json(author): Json<Author>,
) -> AppResult<(StatusCode, Json<Author>)> {
    author.validate()?;

    let created = state.services.authors.create(author).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// List all authors
#[utoipa::path(
    get,
    path = "/authors",
    tag = "authors",
    responses(
        (status = 200, description = "List of authors", body = Vec<Author>)
    )
)]
pub async fn list_authors(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Author>>> {
    let authors = state.services.authors.list().await?;
    Ok(Json(authors))
}

/// Get author by ID
#[utoipa::path(
    get,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i64, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author details", body = Author),
        (status = 404, description = "Author not found")
    )
)]
pub async fn get_author(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Author>> {
    state
        .services
        .authors
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(ErrorCode::NoSuchAuthor, format!("Author {} not found", id)))
}

/// Replace an existing author
#[utoipa::path(
    put,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i64, Path, description = "Author ID")),
    request_body = Author,
    responses(
        (status = 200, description = "Author replaced", body = Author),
        (status = 400, description = "Author does not exist or is invalid", body = crate::error::ErrorResponse)
    )
)]
pub async fn full_update_author(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(author): Json<Author>,
) -> AppResult<Json<Author>> {
    author.validate()?;

    let updated = state.services.authors.full_update(id, author).await?;
    Ok(Json(updated))
}

/// Update the supplied fields of an existing author
#[utoipa::path(
    patch,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i64, Path, description = "Author ID")),
    request_body = UpdateAuthor,
    responses(
        (status = 200, description = "Author updated", body = Author),
        (status = 400, description = "Author does not exist or is invalid", body = crate::error::ErrorResponse)
    )
)]
pub async fn partial_update_author(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(update): Json<UpdateAuthor>,
) -> AppResult<Json<Author>> {
    update.validate()?;

    let updated = state.services.authors.partial_update(id, update).await?;
    Ok(Json(updated))
}

/// Delete an author
#[utoipa::path(
    delete,
    path = "/authors/{id}",
    tag = "authors",
    params(("id" = i64, Path, description = "Author ID")),
    responses(
        (status = 204, description = "Author deleted (or already absent)")
    )
)]
pub async fn delete_author(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.authors.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
