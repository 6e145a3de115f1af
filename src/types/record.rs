use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Clone, Debug)]
pub(crate) struct User {
    pub(crate) id: Uuid,
    pub(crate) username: String,
    pub(crate) password_hash: String,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Author {
    pub(crate) id: Uuid,
    pub(crate) user_id: Uuid,
    pub(crate) name: String,
    pub(crate) birthdate: DateTime<Utc>,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Book {
    pub(crate) id: Uuid,
    pub(crate) user_id: Uuid,
    pub(crate) author_id: Uuid,
    pub(crate) title: String,
    pub(crate) isbn: String,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug)]
pub(crate) struct NewUser {
    pub(crate) username: String,
    pub(crate) password_hash: String,
}

#[derive(Clone, Debug)]
pub(crate) struct NewAuthor {
    pub(crate) user_id: Uuid,
    pub(crate) name: String,
    pub(crate) birthdate: DateTime<Utc>,
}

/// Mutable author fields. The owner is deliberately absent.
#[derive(Clone, Debug)]
pub(crate) struct AuthorChanges {
    pub(crate) name: String,
    pub(crate) birthdate: DateTime<Utc>,
}

#[derive(Clone, Debug)]
pub(crate) struct NewBook {
    pub(crate) user_id: Uuid,
    pub(crate) author_id: Uuid,
    pub(crate) title: String,
    pub(crate) isbn: String,
}

/// Mutable book fields. The owner is deliberately absent.
#[derive(Clone, Debug)]
pub(crate) struct BookChanges {
    pub(crate) author_id: Uuid,
    pub(crate) title: String,
    pub(crate) isbn: String,
}
