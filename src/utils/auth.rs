use std::convert::Infallible;

use axum::body::Body;
use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::http::{HeaderMap, Response, header};
use axum::middleware::Next;

use crate::core::error::{AuthError, Error};
use crate::core::state::AppState;
use crate::types::user::Identity;

const BEARER: &str = "Bearer ";

/// Gate for every non-public route: verifies the bearer token and stores the
/// resulting [`Identity`] in the request extensions.
pub(crate) async fn authorize(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response<Body>, Error> {
    let token = bearer_token(request.headers())?;

    let identity = state.tokens.verify(token)?;

    tracing::debug!(user_id = %identity.user_id, "authorized");

    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}

/// Accepts exactly one `Authorization` header of the form `Bearer <token>`.
fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let mut values = headers.get_all(header::AUTHORIZATION).iter();

    let (Some(value), None) = (values.next(), values.next()) else {
        return Err(AuthError::MalformedHeader);
    };

    let token = value
        .to_str()
        .map_err(|_| AuthError::MalformedHeader)?
        .strip_prefix(BEARER)
        .ok_or(AuthError::MalformedHeader)?;

    if token.is_empty() || token.contains(BEARER) {
        return Err(AuthError::MalformedHeader);
    }

    Ok(token)
}

/// The identity attached by [`authorize`], if any.
#[derive(Clone, Debug)]
pub(crate) struct Caller(Option<Identity>);

impl Caller {
    pub(crate) fn identity(&self) -> Option<&Identity> {
        self.0.as_ref()
    }

    pub(crate) fn require(&self) -> Result<&Identity, Error> {
        self.identity()
            .ok_or(Error::Unauthorized(AuthError::MissingIdentity))
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Caller {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Caller(parts.extensions.get::<Identity>().cloned()))
    }
}
