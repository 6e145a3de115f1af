use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::types::record::{AuthorChanges, BookChanges};

#[derive(Deserialize, Validate)]
pub(crate) struct Credentials {
    #[validate(length(min = 1, message = "username is required"))]
    pub(crate) username: String,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub(crate) password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct AuthorParams {
    #[validate(length(min = 1, message = "name is required"))]
    pub(crate) name: String,
    pub(crate) birthdate: DateTime<Utc>,
}

impl From<AuthorParams> for AuthorChanges {
    fn from(params: AuthorParams) -> Self {
        Self {
            name: params.name,
            birthdate: params.birthdate,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct BookParams {
    #[validate(length(min = 1, message = "title is required"))]
    pub(crate) title: String,
    #[validate(length(min = 1, message = "isbn is required"))]
    pub(crate) isbn: String,
    pub(crate) author_id: Uuid,
}

impl From<BookParams> for BookChanges {
    fn from(params: BookParams) -> Self {
        Self {
            author_id: params.author_id,
            title: params.title,
            isbn: params.isbn,
        }
    }
}
