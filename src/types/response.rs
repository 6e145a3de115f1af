use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use uuid::Uuid;

use crate::types::record;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum Message {
    Ok,
    Created,
    InvalidCredentials,
    #[serde(rename = "USER_ALREADY_USED")]
    UsernameAlreadyUsed,
    InternalServerError,
    AuthorNotFound,
    BookNotFound,
    AuthorSuccessfullyDeleted,
    BookSuccessfullyDeleted,
}

/// Successful response body: `{"status", "message", "data"}`.
///
/// Errors are rendered as [`Failure`] instead, so a body never carries both
/// `data` and `error`.
#[derive(Debug, Serialize)]
pub(crate) struct Envelope<T> {
    #[serde(serialize_with = "status_code")]
    status: StatusCode,
    message: Message,
    data: T,
}

impl<T> Envelope<T> {
    pub(crate) fn success(status: StatusCode, message: Message, data: T) -> Self {
        Self {
            status,
            message,
            data,
        }
    }

    pub(crate) fn ok(data: T) -> Self {
        Self::success(StatusCode::OK, Message::Ok, data)
    }

    pub(crate) fn created(data: T) -> Self {
        Self::success(StatusCode::CREATED, Message::Created, data)
    }

    pub(crate) fn status(&self) -> StatusCode {
        self.status
    }

    pub(crate) fn message(&self) -> Message {
        self.message
    }

    pub(crate) fn data(&self) -> &T {
        &self.data
    }

    pub(crate) fn into_data(self) -> T {
        self.data
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

/// Error response body: `{"status", "message", "error"}`.
#[derive(Debug, Serialize)]
pub(crate) struct Failure {
    #[serde(serialize_with = "status_code")]
    status: StatusCode,
    message: Message,
    error: String,
}

impl Failure {
    pub(crate) fn new(status: StatusCode, message: Message, error: impl Into<String>) -> Self {
        Self {
            status,
            message,
            error: error.into(),
        }
    }
}

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

fn status_code<S: Serializer>(status: &StatusCode, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u16(status.as_u16())
}

/// A user as returned to clients; never includes the password hash.
#[derive(Clone, Debug, Serialize)]
pub(crate) struct User {
    pub(crate) id: Uuid,
    pub(crate) username: String,
    pub(crate) created_at: DateTime<Utc>,
}

impl From<record::User> for User {
    fn from(user: record::User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            created_at: user.created_at,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub(crate) struct Login {
    pub(crate) id: Uuid,
    pub(crate) username: String,
    pub(crate) token: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub(crate) struct Author {
    pub(crate) id: Uuid,
    pub(crate) user_id: Uuid,
    pub(crate) name: String,
    pub(crate) birthdate: DateTime<Utc>,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

impl From<record::Author> for Author {
    fn from(author: record::Author) -> Self {
        Self {
            id: author.id,
            user_id: author.user_id,
            name: author.name,
            birthdate: author.birthdate,
            created_at: author.created_at,
            updated_at: author.updated_at,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub(crate) struct Book {
    pub(crate) id: Uuid,
    pub(crate) user_id: Uuid,
    pub(crate) author_id: Uuid,
    pub(crate) title: String,
    pub(crate) isbn: String,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) updated_at: DateTime<Utc>,
}

impl From<record::Book> for Book {
    fn from(book: record::Book) -> Self {
        Self {
            id: book.id,
            user_id: book.user_id,
            author_id: book.author_id,
            title: book.title,
            isbn: book.isbn,
            created_at: book.created_at,
            updated_at: book.updated_at,
        }
    }
}

/// Owner of a record that has just been removed.
#[derive(Clone, Debug, Serialize)]
pub(crate) struct Deleted {
    pub(crate) user_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_carries_data() {
        let envelope = Envelope::created(Deleted {
            user_id: Uuid::nil(),
        });

        let body = serde_json::to_value(&envelope).unwrap();

        assert_eq!(
            body,
            json!({
                "status": 201,
                "message": "CREATED",
                "data": {"user_id": "00000000-0000-0000-0000-000000000000"}
            })
        );
    }

    #[test]
    fn failure_omits_data() {
        let failure = Failure::new(
            StatusCode::BAD_REQUEST,
            Message::UsernameAlreadyUsed,
            "username already taken",
        );

        let body = serde_json::to_value(&failure).unwrap();

        assert_eq!(
            body,
            json!({
                "status": 400,
                "message": "USER_ALREADY_USED",
                "error": "username already taken"
            })
        );
    }

    #[test]
    fn empty_list_serializes_as_array() {
        let envelope = Envelope::ok(Vec::<Author>::new());

        let body = serde_json::to_value(&envelope).unwrap();

        assert_eq!(body["data"], json!([]));
    }

    #[test]
    fn message_codes() {
        assert_eq!(
            serde_json::to_value(Message::AuthorSuccessfullyDeleted).unwrap(),
            json!("AUTHOR_SUCCESSFULLY_DELETED")
        );
        assert_eq!(
            serde_json::to_value(Message::InternalServerError).unwrap(),
            json!("INTERNAL_SERVER_ERROR")
        );
    }
}
