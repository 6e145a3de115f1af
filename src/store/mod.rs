use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use uuid::Uuid;

use crate::core::error::ConfigError;
use crate::types::record::{
    Author, AuthorChanges, Book, BookChanges, NewAuthor, NewBook, NewUser, User,
};

#[cfg(test)]
pub(crate) mod memory;
pub(crate) mod postgres;

pub(crate) async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool, ConfigError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// Lookups return `Ok(None)` when no record matches.
#[async_trait]
pub(crate) trait UserRepository: Send + Sync {
    async fn create(&self, user: NewUser) -> Result<User, sqlx::Error>;

    /// Case-insensitive match on the username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error>;
}

#[async_trait]
pub(crate) trait AuthorRepository: Send + Sync {
    async fn create(&self, author: NewAuthor) -> Result<Author, sqlx::Error>;

    async fn list(&self) -> Result<Vec<Author>, sqlx::Error>;

    async fn get(&self, id: Uuid) -> Result<Option<Author>, sqlx::Error>;

    async fn update(&self, id: Uuid, changes: AuthorChanges) -> Result<Option<Author>, sqlx::Error>;

    /// Returns whether a record was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error>;
}

#[async_trait]
pub(crate) trait BookRepository: Send + Sync {
    async fn create(&self, book: NewBook) -> Result<Book, sqlx::Error>;

    async fn list(&self) -> Result<Vec<Book>, sqlx::Error>;

    async fn get(&self, id: Uuid) -> Result<Option<Book>, sqlx::Error>;

    async fn update(&self, id: Uuid, changes: BookChanges) -> Result<Option<Book>, sqlx::Error>;

    async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error>;
}
