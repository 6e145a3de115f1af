use std::sync::Arc;

use axum::http::StatusCode;
use uuid::Uuid;

use crate::core::error::Error;
use crate::store::AuthorRepository;
use crate::types::record::NewAuthor;
use crate::types::request::AuthorParams;
use crate::types::response::{self, Envelope, Message};
use crate::types::user::Identity;

#[derive(Clone)]
pub(crate) struct AuthorController {
    authors: Arc<dyn AuthorRepository>,
}

impl std::fmt::Debug for AuthorController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthorController").finish_non_exhaustive()
    }
}

impl AuthorController {
    pub(crate) fn new(authors: Arc<dyn AuthorRepository>) -> Self {
        Self { authors }
    }

    /// The caller becomes the owner; nothing in `params` can say otherwise.
    pub(crate) async fn create(
        &self,
        owner: &Identity,
        params: AuthorParams,
    ) -> Result<Envelope<response::Author>, Error> {
        let author = self
            .authors
            .create(NewAuthor {
                user_id: owner.user_id,
                name: params.name,
                birthdate: params.birthdate,
            })
            .await?;

        tracing::info!(author_id = %author.id, user_id = %author.user_id, "author created");

        Ok(Envelope::created(author.into()))
    }

    pub(crate) async fn list(&self) -> Result<Envelope<Vec<response::Author>>, Error> {
        let authors = self.authors.list().await?;

        Ok(Envelope::ok(authors.into_iter().map(Into::into).collect()))
    }

    pub(crate) async fn get(&self, id: Uuid) -> Result<Envelope<response::Author>, Error> {
        let author = self.authors.get(id).await?.ok_or(Error::AuthorNotFound)?;

        Ok(Envelope::ok(author.into()))
    }

    pub(crate) async fn update(
        &self,
        id: Uuid,
        params: AuthorParams,
    ) -> Result<Envelope<response::Author>, Error> {
        self.authors.get(id).await?.ok_or(Error::AuthorNotFound)?;

        let author = self
            .authors
            .update(id, params.into())
            .await?
            .ok_or(Error::AuthorNotFound)?;

        Ok(Envelope::ok(author.into()))
    }

    pub(crate) async fn delete(&self, id: Uuid) -> Result<Envelope<response::Deleted>, Error> {
        let author = self.authors.get(id).await?.ok_or(Error::AuthorNotFound)?;

        if !self.authors.delete(id).await? {
            return Err(Error::AuthorNotFound);
        }

        tracing::info!(author_id = %id, "author deleted");

        Ok(Envelope::success(
            StatusCode::NO_CONTENT,
            Message::AuthorSuccessfullyDeleted,
            response::Deleted {
                user_id: author.user_id,
            },
        ))
    }
}
