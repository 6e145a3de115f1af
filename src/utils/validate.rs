use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::core::error::Error;

/// JSON body that has been deserialized and passed its field constraints.
#[derive(Debug)]
pub(crate) struct Valid<T>(pub(crate) T);

impl<S, T> FromRequest<S> for Valid<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| Error::Validation(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| Error::Validation(errors.to_string()))?;

        Ok(Valid(value))
    }
}
