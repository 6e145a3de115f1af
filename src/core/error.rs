use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::types::response::{Failure, Message};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Database migration error: {0}")]
    DatabaseMigration(#[from] sqlx::migrate::MigrateError),
    #[error("IO error: {0}")]
    IO(#[from] std::io::Error),
    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum AuthError {
    #[error("invalid bearer token")]
    MalformedHeader,
    #[error("token doesn't exist")]
    MissingIdentity,
    #[error("invalid token")]
    InvalidToken,
    #[error("token is expired")]
    ExpiredToken,
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    InvalidIdentifier(&'static str),
    #[error("{0}")]
    Unauthorized(#[from] AuthError),
    #[error("{0}")]
    Forbidden(&'static str),
    #[error("author not found")]
    AuthorNotFound,
    #[error("book not found")]
    BookNotFound,
    #[error("username already taken")]
    UsernameTaken,
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),
    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

impl Error {
    pub(crate) fn status(&self) -> StatusCode {
        match self {
            Error::Validation(_) | Error::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
            Error::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Error::Forbidden(_) => StatusCode::FORBIDDEN,
            Error::AuthorNotFound | Error::BookNotFound => StatusCode::BAD_REQUEST,
            Error::UsernameTaken | Error::InvalidCredentials => StatusCode::BAD_REQUEST,
            Error::Sql(_) | Error::Bcrypt(_) | Error::Jwt(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message code for errors rendered as an envelope; `None` for the
    /// request-gate errors that answer with a bare `{"error": ...}` body.
    pub(crate) fn message(&self) -> Option<Message> {
        match self {
            Error::Validation(_)
            | Error::InvalidIdentifier(_)
            | Error::Unauthorized(_)
            | Error::Forbidden(_) => None,
            Error::AuthorNotFound => Some(Message::AuthorNotFound),
            Error::BookNotFound => Some(Message::BookNotFound),
            Error::UsernameTaken => Some(Message::UsernameAlreadyUsed),
            Error::InvalidCredentials => Some(Message::InvalidCredentials),
            Error::Sql(_) | Error::Bcrypt(_) | Error::Jwt(_) => Some(Message::InternalServerError),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();

        let Some(message) = self.message() else {
            tracing::debug!("request rejected: {}", self);
            return (status, Json(json!({ "error": self.to_string() }))).into_response();
        };

        if status.is_server_error() {
            tracing::error!("{:?}", self);
            return Failure::new(status, message, "internal server error").into_response();
        }

        Failure::new(status, message, self.to_string()).into_response()
    }
}
