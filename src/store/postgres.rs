use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgRow};
use sqlx::Row;
use uuid::Uuid;

use crate::store::{AuthorRepository, BookRepository, UserRepository};
use crate::types::record::{
    Author, AuthorChanges, Book, BookChanges, NewAuthor, NewBook, NewUser, User,
};

#[derive(Clone, Debug)]
pub(crate) struct PgUsers {
    pool: PgPool,
}

impl PgUsers {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUsers {
    async fn create(&self, user: NewUser) -> Result<User, sqlx::Error> {
        sqlx::query(
            "INSERT INTO users (id, username, password_hash) VALUES ($1, $2, $3) RETURNING
                id,
                username,
                password_hash,
                created_at,
                updated_at;",
        )
        .bind(Uuid::new_v4())
        .bind(&user.username)
        .bind(&user.password_hash)
        .map(map_user)
        .fetch_one(&self.pool)
        .await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error> {
        match sqlx::query(
            "SELECT
                id,
                username,
                password_hash,
                created_at,
                updated_at
            FROM users
            WHERE lower(username) = lower($1);",
        )
        .bind(username)
        .map(map_user)
        .fetch_one(&self.pool)
        .await
        {
            Ok(user) => Ok(Some(user)),
            Err(sqlx::Error::RowNotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct PgAuthors {
    pool: PgPool,
}

impl PgAuthors {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorRepository for PgAuthors {
    async fn create(&self, author: NewAuthor) -> Result<Author, sqlx::Error> {
        sqlx::query(
            "INSERT INTO authors (id, user_id, name, birthdate) VALUES ($1, $2, $3, $4) RETURNING
                id,
                user_id,
                name,
                birthdate,
                created_at,
                updated_at;",
        )
        .bind(Uuid::new_v4())
        .bind(author.user_id)
        .bind(&author.name)
        .bind(author.birthdate)
        .map(map_author)
        .fetch_one(&self.pool)
        .await
    }

    async fn list(&self) -> Result<Vec<Author>, sqlx::Error> {
        sqlx::query(
            "SELECT
                id,
                user_id,
                name,
                birthdate,
                created_at,
                updated_at
            FROM authors
            ORDER BY created_at;",
        )
        .map(map_author)
        .fetch_all(&self.pool)
        .await
    }

    async fn get(&self, id: Uuid) -> Result<Option<Author>, sqlx::Error> {
        sqlx::query(
            "SELECT
                id,
                user_id,
                name,
                birthdate,
                created_at,
                updated_at
            FROM authors
            WHERE id = $1;",
        )
        .bind(id)
        .map(map_author)
        .fetch_optional(&self.pool)
        .await
    }

    async fn update(&self, id: Uuid, changes: AuthorChanges) -> Result<Option<Author>, sqlx::Error> {
        sqlx::query(
            "UPDATE authors SET name = $2, birthdate = $3, updated_at = now() WHERE id = $1 RETURNING
                id,
                user_id,
                name,
                birthdate,
                created_at,
                updated_at;",
        )
        .bind(id)
        .bind(&changes.name)
        .bind(changes.birthdate)
        .map(map_author)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1;")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[derive(Clone, Debug)]
pub(crate) struct PgBooks {
    pool: PgPool,
}

impl PgBooks {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for PgBooks {
    async fn create(&self, book: NewBook) -> Result<Book, sqlx::Error> {
        sqlx::query(
            "INSERT INTO books (id, user_id, author_id, title, isbn) VALUES ($1, $2, $3, $4, $5) RETURNING
                id,
                user_id,
                author_id,
                title,
                isbn,
                created_at,
                updated_at;",
        )
        .bind(Uuid::new_v4())
        .bind(book.user_id)
        .bind(book.author_id)
        .bind(&book.title)
        .bind(&book.isbn)
        .map(map_book)
        .fetch_one(&self.pool)
        .await
    }

    async fn list(&self) -> Result<Vec<Book>, sqlx::Error> {
        sqlx::query(
            "SELECT
                id,
                user_id,
                author_id,
                title,
                isbn,
                created_at,
                updated_at
            FROM books
            ORDER BY created_at;",
        )
        .map(map_book)
        .fetch_all(&self.pool)
        .await
    }

    async fn get(&self, id: Uuid) -> Result<Option<Book>, sqlx::Error> {
        sqlx::query(
            "SELECT
                id,
                user_id,
                author_id,
                title,
                isbn,
                created_at,
                updated_at
            FROM books
            WHERE id = $1;",
        )
        .bind(id)
        .map(map_book)
        .fetch_optional(&self.pool)
        .await
    }

    async fn update(&self, id: Uuid, changes: BookChanges) -> Result<Option<Book>, sqlx::Error> {
        sqlx::query(
            "UPDATE books SET author_id = $2, title = $3, isbn = $4, updated_at = now() WHERE id = $1 RETURNING
                id,
                user_id,
                author_id,
                title,
                isbn,
                created_at,
                updated_at;",
        )
        .bind(id)
        .bind(changes.author_id)
        .bind(&changes.title)
        .bind(&changes.isbn)
        .map(map_book)
        .fetch_optional(&self.pool)
        .await
    }

    async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1;")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_user(row: PgRow) -> User {
    User {
        id: row.get("id"),
        username: row.get("username"),
        password_hash: row.get("password_hash"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn map_author(row: PgRow) -> Author {
    Author {
        id: row.get("id"),
        user_id: row.get("user_id"),
        name: row.get("name"),
        birthdate: row.get("birthdate"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn map_book(row: PgRow) -> Book {
    Book {
        id: row.get("id"),
        user_id: row.get("user_id"),
        author_id: row.get("author_id"),
        title: row.get("title"),
        isbn: row.get("isbn"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}
