//! Author model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{merge_field, PartialUpdate};

/// Full author record.
///
/// `id` is absent until the author has been persisted once; the record store
/// assigns it on first save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, Validate, ToSchema)]
pub struct Author {
    pub id: Option<i64>,
    pub name: String,
    #[validate(range(min = 0, message = "Age cannot be negative"))]
    pub age: i32,
    pub description: String,
    /// Image reference (URL or file name)
    pub image: String,
}

impl Author {
    /// Copy of this author bound to the given key
    pub fn with_id(self, id: i64) -> Self {
        Self { id: Some(id), ..self }
    }
}

/// Author reference embedded in book payloads.
///
/// On input only `id` is read; on output `name` and `image` are filled from
/// the referenced author when it still exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthorSummary {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl AuthorSummary {
    /// Bare reference carrying only the author key
    pub fn reference(id: i64) -> Self {
        Self {
            id,
            name: None,
            image: None,
        }
    }
}

/// Partial update author request
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate, ToSchema)]
pub struct UpdateAuthor {
    pub name: Option<String>,
    #[validate(range(min = 0, message = "Age cannot be negative"))]
    pub age: Option<i32>,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl PartialUpdate<Author> for UpdateAuthor {
    fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.description.is_none() && self.image.is_none()
    }

    fn apply_to(self, mut author: Author) -> Author {
        merge_field(&mut author.name, self.name);
        merge_field(&mut author.age, self.age);
        merge_field(&mut author.description, self.description);
        merge_field(&mut author.image, self.image);
        author
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john_doe() -> Author {
        Author {
            id: Some(1),
            name: "John Doe".to_string(),
            age: 30,
            description: "Some description".to_string(),
            image: "author-image.jpg".to_string(),
        }
    }

    #[test]
    fn test_empty_update_is_identity() {
        let update = UpdateAuthor::default();
        assert!(update.is_empty());
        assert_eq!(update.apply_to(john_doe()), john_doe());
    }

    #[test]
    fn test_single_field_update_touches_only_that_field() {
        let updated = UpdateAuthor {
            age: Some(50),
            ..Default::default()
        }
        .apply_to(john_doe());

        assert_eq!(updated, Author { age: 50, ..john_doe() });
    }

    #[test]
    fn test_update_never_changes_id() {
        let updated = UpdateAuthor {
            name: Some("New Name".to_string()),
            description: Some(String::new()),
            ..Default::default()
        }
        .apply_to(john_doe());

        assert_eq!(updated.id, Some(1));
        assert_eq!(updated.name, "New Name");
        assert_eq!(updated.description, "");
        assert_eq!(updated.image, "author-image.jpg");
    }

    #[test]
    fn test_absent_and_null_fields_deserialize_as_not_supplied() {
        let update: UpdateAuthor =
            serde_json::from_str(r#"{"name": null, "image": ""}"#).unwrap();
        assert_eq!(update.name, None);
        assert_eq!(update.age, None);
        assert_eq!(update.image, Some(String::new()));
    }

    #[test]
    fn test_negative_age_fails_validation() {
        let author = Author { age: -1, ..john_doe() };
        assert!(author.validate().is_err());
        assert!(john_doe().validate().is_ok());
    }
}
