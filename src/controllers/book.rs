use std::sync::Arc;

use axum::http::StatusCode;
use uuid::Uuid;

use crate::core::error::Error;
use crate::store::BookRepository;
use crate::types::record::NewBook;
use crate::types::request::BookParams;
use crate::types::response::{self, Envelope, Message};
use crate::types::user::Identity;

#[derive(Clone)]
pub(crate) struct BookController {
    books: Arc<dyn BookRepository>,
}

impl std::fmt::Debug for BookController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookController").finish_non_exhaustive()
    }
}

impl BookController {
    pub(crate) fn new(books: Arc<dyn BookRepository>) -> Self {
        Self { books }
    }

    pub(crate) async fn create(
        &self,
        owner: &Identity,
        params: BookParams,
    ) -> Result<Envelope<response::Book>, Error> {
        let book = self
            .books
            .create(NewBook {
                user_id: owner.user_id,
                author_id: params.author_id,
                title: params.title,
                isbn: params.isbn,
            })
            .await?;

        tracing::info!(book_id = %book.id, user_id = %book.user_id, "book created");

        Ok(Envelope::created(book.into()))
    }

    pub(crate) async fn list(&self) -> Result<Envelope<Vec<response::Book>>, Error> {
        let books = self.books.list().await?;

        Ok(Envelope::ok(books.into_iter().map(Into::into).collect()))
    }

    pub(crate) async fn get(&self, id: Uuid) -> Result<Envelope<response::Book>, Error> {
        let book = self.books.get(id).await?.ok_or(Error::BookNotFound)?;

        Ok(Envelope::ok(book.into()))
    }

    pub(crate) async fn update(
        &self,
        id: Uuid,
        params: BookParams,
    ) -> Result<Envelope<response::Book>, Error> {
        self.books.get(id).await?.ok_or(Error::BookNotFound)?;

        let book = self
            .books
            .update(id, params.into())
            .await?
            .ok_or(Error::BookNotFound)?;

        Ok(Envelope::ok(book.into()))
    }

    pub(crate) async fn delete(&self, id: Uuid) -> Result<Envelope<response::Deleted>, Error> {
        let book = self.books.get(id).await?.ok_or(Error::BookNotFound)?;

        if !self.books.delete(id).await? {
            return Err(Error::BookNotFound);
        }

        tracing::info!(book_id = %id, "book deleted");

        Ok(Envelope::success(
            StatusCode::NO_CONTENT,
            Message::BookSuccessfullyDeleted,
            response::Deleted {
                user_id: book.user_id,
            },
        ))
    }
}
