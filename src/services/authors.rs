//! Author catalog service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult, ErrorCode},
    models::{Author, PartialUpdate, UpdateAuthor},
    repository::AuthorStore,
};

#[derive(Clone)]
pub struct AuthorsService {
    authors: Arc<dyn AuthorStore>,
}

impl AuthorsService {
    pub fn new(authors: Arc<dyn AuthorStore>) -> Self {
        Self { authors }
    }

    /// Persist a new author; the store assigns its key.
    ///
    /// An author that already carries a key is rejected so creation can never
    /// overwrite an existing identity.
    pub async fn create(&self, author: Author) -> AppResult<Author> {
        if let Some(id) = author.id {
            return Err(AppError::InvalidInput(
                ErrorCode::AuthorAlreadyPersisted,
                format!("Author {} is already persisted, create takes an author without id", id),
            ));
        }
        self.authors.save(author).await
    }

    pub async fn list(&self) -> AppResult<Vec<Author>> {
        self.authors.list_all().await
    }

    /// Author at `id`, `None` when absent
    pub async fn get(&self, id: i64) -> AppResult<Option<Author>> {
        self.authors.get(id).await
    }

    /// Replace every field of the author at `id`; the key is forced to `id`
    pub async fn full_update(&self, id: i64, author: Author) -> AppResult<Author> {
        if !self.authors.exists(id).await? {
            return Err(missing_author(id));
        }
        self.authors.save(author.with_id(id)).await
    }

    /// Overwrite only the fields present in `update`
    pub async fn partial_update(&self, id: i64, update: UpdateAuthor) -> AppResult<Author> {
        let existing = self.authors.get(id).await?.ok_or_else(|| missing_author(id))?;
        if update.is_empty() {
            return Ok(existing);
        }
        self.authors.save(update.apply_to(existing)).await
    }

    /// Round-trip to the author store without reading any rows
    pub async fn ping(&self) -> AppResult<()> {
        self.authors.exists(0).await.map(|_| ())
    }

    /// Remove the author at `id`. Books referencing it are left in place.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.authors.delete(id).await
    }
}

fn missing_author(id: i64) -> AppError {
    AppError::InvalidState(ErrorCode::NoSuchAuthor, format!("Author {} does not exist", id))
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use tokio_test::{assert_err, assert_ok};

    use super::*;
    use crate::repository::{memory::InMemoryAuthorStore, MockAuthorStore};

    fn author_a() -> Author {
        Author {
            id: None,
            name: "John Doe".to_string(),
            age: 30,
            description: "Some description".to_string(),
            image: "author-image.jpg".to_string(),
        }
    }

    fn author_b() -> Author {
        Author {
            id: None,
            name: "Don Joe".to_string(),
            age: 65,
            description: "Some other description".to_string(),
            image: "some-other-image.jpeg".to_string(),
        }
    }

    fn service() -> (AuthorsService, Arc<InMemoryAuthorStore>) {
        let store = Arc::new(InMemoryAuthorStore::new());
        (AuthorsService::new(store.clone()), store)
    }

    #[tokio::test]
    async fn test_create_assigns_key_and_persists() {
        let (service, store) = service();

        let saved = assert_ok!(service.create(author_a()).await);
        let id = saved.id.expect("key assigned");

        let recalled = store.get(id).await.unwrap();
        assert_eq!(recalled, Some(author_a().with_id(id)));
    }

    #[tokio::test]
    async fn test_create_with_key_is_rejected_without_write() {
        let mut store = MockAuthorStore::new();
        store.expect_save().never();
        let service = AuthorsService::new(Arc::new(store));

        let err = assert_err!(service.create(author_a().with_id(999)).await);
        assert!(matches!(err, AppError::InvalidInput(ErrorCode::AuthorAlreadyPersisted, _)));
    }

    #[tokio::test]
    async fn test_list_is_empty_then_returns_saved_authors() {
        let (service, store) = service();
        assert!(service.list().await.unwrap().is_empty());

        let saved = store.save(author_a()).await.unwrap();
        assert_eq!(service.list().await.unwrap(), vec![saved]);
    }

    #[tokio::test]
    async fn test_get_absent_author_is_none() {
        let (service, _) = service();
        assert_eq!(service.get(999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_full_update_replaces_every_field() {
        let (service, store) = service();
        let existing = store.save(author_a()).await.unwrap();
        let id = existing.id.unwrap();

        let result = service.full_update(id, author_b()).await.unwrap();
        assert_eq!(result, author_b().with_id(id));
        assert_eq!(store.get(id).await.unwrap(), Some(author_b().with_id(id)));
    }

    #[tokio::test]
    async fn test_full_update_forces_path_key() {
        let (service, store) = service();
        let id = store.save(author_a()).await.unwrap().id.unwrap();

        let result = service.full_update(id, author_b().with_id(id + 100)).await.unwrap();
        assert_eq!(result.id, Some(id));
        assert!(!store.exists(id + 100).await.unwrap());
    }

    #[tokio::test]
    async fn test_full_update_missing_author_fails_without_write() {
        let mut store = MockAuthorStore::new();
        store.expect_exists().with(eq(999)).returning(|_| Ok(false));
        store.expect_save().never();
        let service = AuthorsService::new(Arc::new(store));

        let err = assert_err!(service.full_update(999, author_b()).await);
        assert!(matches!(err, AppError::InvalidState(ErrorCode::NoSuchAuthor, _)));
    }

    #[tokio::test]
    async fn test_partial_update_missing_author_fails() {
        let (service, _) = service();
        let update = UpdateAuthor {
            name: Some("New Name".to_string()),
            ..Default::default()
        };

        let err = assert_err!(service.partial_update(999, update).await);
        assert!(matches!(err, AppError::InvalidState(ErrorCode::NoSuchAuthor, _)));
    }

    #[tokio::test]
    async fn test_partial_update_with_no_fields_returns_stored_author() {
        let mut store = MockAuthorStore::new();
        store
            .expect_get()
            .with(eq(1))
            .returning(|id| Ok(Some(author_a().with_id(id))));
        store.expect_save().never();
        let service = AuthorsService::new(Arc::new(store));

        let result = service.partial_update(1, UpdateAuthor::default()).await.unwrap();
        assert_eq!(result, author_a().with_id(1));
    }

    async fn assert_partial_update(update: UpdateAuthor, expected: Author) {
        let (service, store) = service();
        let id = store.save(author_a()).await.unwrap().id.unwrap();

        let result = service.partial_update(id, update).await.unwrap();
        assert_eq!(result, expected.clone().with_id(id));
        assert_eq!(store.get(id).await.unwrap(), Some(expected.with_id(id)));
    }

    #[tokio::test]
    async fn test_partial_update_name() {
        let update = UpdateAuthor { name: Some("New Name".to_string()), ..Default::default() };
        assert_partial_update(update, Author { name: "New Name".to_string(), ..author_a() }).await;
    }

    #[tokio::test]
    async fn test_partial_update_age() {
        let update = UpdateAuthor { age: Some(50), ..Default::default() };
        assert_partial_update(update, Author { age: 50, ..author_a() }).await;
    }

    #[tokio::test]
    async fn test_partial_update_description() {
        let update = UpdateAuthor {
            description: Some("new Description".to_string()),
            ..Default::default()
        };
        assert_partial_update(update, Author { description: "new Description".to_string(), ..author_a() })
            .await;
    }

    #[tokio::test]
    async fn test_partial_update_image_to_empty_string() {
        let update = UpdateAuthor { image: Some(String::new()), ..Default::default() };
        assert_partial_update(update, Author { image: String::new(), ..author_a() }).await;
    }

    #[tokio::test]
    async fn test_delete_existing_and_missing_author() {
        let (service, store) = service();
        let id = store.save(author_a()).await.unwrap().id.unwrap();

        assert_ok!(service.delete(id).await);
        assert!(!store.exists(id).await.unwrap());

        assert_ok!(service.delete(999).await);
        assert!(!store.exists(999).await.unwrap());
    }

    #[tokio::test]
    async fn test_ping_checks_a_single_key() {
        let mut store = MockAuthorStore::new();
        store.expect_exists().with(eq(0)).times(1).returning(|_| Ok(false));
        store.expect_list_all().never();
        let service = AuthorsService::new(Arc::new(store));

        assert_ok!(service.ping().await);
    }
}
