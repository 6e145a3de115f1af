//! In-memory repositories for tests. Each one counts the mutating calls it
//! receives and can be built to fail every call.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::store::{AuthorRepository, BookRepository, UserRepository};
use crate::types::record::{
    Author, AuthorChanges, Book, BookChanges, NewAuthor, NewBook, NewUser, User,
};

#[derive(Debug)]
pub(crate) struct Memory<T> {
    records: RwLock<Vec<T>>,
    writes: AtomicUsize,
    failing: bool,
}

impl<T> Memory<T> {
    pub(crate) fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            writes: AtomicUsize::new(0),
            failing: false,
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            failing: true,
            ..Self::new()
        }
    }

    /// Number of create/update/delete calls received so far.
    pub(crate) fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn check(&self) -> Result<(), sqlx::Error> {
        match self.failing {
            true => Err(sqlx::Error::PoolTimedOut),
            false => Ok(()),
        }
    }

    fn record_write(&self) -> Result<(), sqlx::Error> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.check()
    }
}

#[async_trait]
impl UserRepository for Memory<User> {
    async fn create(&self, user: NewUser) -> Result<User, sqlx::Error> {
        self.record_write()?;

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username: user.username,
            password_hash: user.password_hash,
            created_at: now,
            updated_at: now,
        };

        self.records.write().await.push(user.clone());

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error> {
        self.check()?;

        let username = username.to_lowercase();

        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|user| user.username.to_lowercase() == username)
            .cloned())
    }
}

#[async_trait]
impl AuthorRepository for Memory<Author> {
    async fn create(&self, author: NewAuthor) -> Result<Author, sqlx::Error> {
        self.record_write()?;

        let now = Utc::now();
        let author = Author {
            id: Uuid::new_v4(),
            user_id: author.user_id,
            name: author.name,
            birthdate: author.birthdate,
            created_at: now,
            updated_at: now,
        };

        self.records.write().await.push(author.clone());

        Ok(author)
    }

    async fn list(&self) -> Result<Vec<Author>, sqlx::Error> {
        self.check()?;

        Ok(self.records.read().await.clone())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Author>, sqlx::Error> {
        self.check()?;

        Ok(self.records.read().await.iter().find(|a| a.id == id).cloned())
    }

    async fn update(&self, id: Uuid, changes: AuthorChanges) -> Result<Option<Author>, sqlx::Error> {
        self.record_write()?;

        let mut records = self.records.write().await;

        Ok(records.iter_mut().find(|a| a.id == id).map(|author| {
            author.name = changes.name;
            author.birthdate = changes.birthdate;
            author.updated_at = Utc::now();
            author.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        self.record_write()?;

        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|a| a.id != id);

        Ok(records.len() < before)
    }
}

#[async_trait]
impl BookRepository for Memory<Book> {
    async fn create(&self, book: NewBook) -> Result<Book, sqlx::Error> {
        self.record_write()?;

        let now = Utc::now();
        let book = Book {
            id: Uuid::new_v4(),
            user_id: book.user_id,
            author_id: book.author_id,
            title: book.title,
            isbn: book.isbn,
            created_at: now,
            updated_at: now,
        };

        self.records.write().await.push(book.clone());

        Ok(book)
    }

    async fn list(&self) -> Result<Vec<Book>, sqlx::Error> {
        self.check()?;

        Ok(self.records.read().await.clone())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Book>, sqlx::Error> {
        self.check()?;

        Ok(self.records.read().await.iter().find(|b| b.id == id).cloned())
    }

    async fn update(&self, id: Uuid, changes: BookChanges) -> Result<Option<Book>, sqlx::Error> {
        self.record_write()?;

        let mut records = self.records.write().await;

        Ok(records.iter_mut().find(|b| b.id == id).map(|book| {
            book.author_id = changes.author_id;
            book.title = changes.title;
            book.isbn = changes.isbn;
            book.updated_at = Utc::now();
            book.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        self.record_write()?;

        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|b| b.id != id);

        Ok(records.len() < before)
    }
}
