//! Ownership checks shared by every resource that records its creator.

use std::future::IntoFuture;

use uuid::Uuid;

use crate::core::error::{AuthError, Error};
use crate::types::response::{self, Envelope};
use crate::types::user::Identity;

/// A resource that belongs to exactly one user.
pub(crate) trait Owned {
    fn owner_id(&self) -> Uuid;
}

impl Owned for response::Author {
    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}

impl Owned for response::Book {
    fn owner_id(&self) -> Uuid {
        self.user_id
    }
}

/// Parses a path identifier, failing with `message` when it is not a UUID.
pub(crate) fn parse_id(raw: &str, message: &'static str) -> Result<Uuid, Error> {
    Uuid::parse_str(raw).map_err(|_| Error::InvalidIdentifier(message))
}

/// Loads a resource and admits the caller only if they own it.
///
/// A failed load is returned unchanged and no ownership check happens. On
/// success the loaded resource is handed back so the caller can go on to
/// mutate it; nothing else in this function touches storage.
pub(crate) async fn ensure_owner<T, L>(
    identity: Option<&Identity>,
    load: L,
    denied: &'static str,
) -> Result<T, Error>
where
    T: Owned,
    L: IntoFuture<Output = Result<Envelope<T>, Error>>,
{
    let resource = load.await?.into_data();

    let identity = identity.ok_or(Error::Unauthorized(AuthError::MissingIdentity))?;

    if identity.user_id != resource.owner_id() {
        tracing::info!(
            user_id = %identity.user_id,
            owner_id = %resource.owner_id(),
            "ownership check failed"
        );
        return Err(Error::Forbidden(denied));
    }

    Ok(resource)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    const DENIED: &str = "You do not have permission to update this author";

    fn identity(user_id: Uuid) -> Identity {
        Identity {
            user_id,
            username: "ada".into(),
            expires_at: Utc::now() + Duration::minutes(5),
        }
    }

    fn author(user_id: Uuid) -> response::Author {
        response::Author {
            id: Uuid::new_v4(),
            user_id,
            name: "Ada".into(),
            birthdate: Utc::now(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn parse_id_rejects_garbage() {
        assert!(matches!(
            parse_id("not-a-uuid", "Invalid author ID format"),
            Err(Error::InvalidIdentifier("Invalid author ID format"))
        ));
        assert!(parse_id(&Uuid::new_v4().to_string(), "x").is_ok());
    }

    #[tokio::test]
    async fn owner_is_admitted() {
        let owner = Uuid::new_v4();
        let loaded = author(owner);

        let resource = ensure_owner(
            Some(&identity(owner)),
            async { Ok(Envelope::ok(loaded.clone())) },
            DENIED,
        )
        .await
        .unwrap();

        assert_eq!(resource, loaded);
    }

    #[tokio::test]
    async fn other_user_is_forbidden() {
        let result = ensure_owner(
            Some(&identity(Uuid::new_v4())),
            async { Ok(Envelope::ok(author(Uuid::new_v4()))) },
            DENIED,
        )
        .await;

        assert!(matches!(result, Err(Error::Forbidden(DENIED))));
    }

    #[tokio::test]
    async fn missing_identity_is_unauthorized() {
        let result = ensure_owner(
            None,
            async { Ok(Envelope::ok(author(Uuid::new_v4()))) },
            DENIED,
        )
        .await;

        assert!(matches!(result, Err(Error::Unauthorized(_))));
    }

    #[tokio::test]
    async fn load_failure_is_propagated_before_identity_check() {
        let result = ensure_owner::<response::Author, _>(
            None,
            async { Err(Error::AuthorNotFound) },
            DENIED,
        )
        .await;

        assert!(matches!(result, Err(Error::AuthorNotFound)));
    }
}
