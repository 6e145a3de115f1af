use std::sync::Arc;

use crate::core::error::Error;
use crate::store::UserRepository;
use crate::types::record::NewUser;
use crate::types::request::Credentials;
use crate::types::response::{self, Envelope};
use crate::utils::token::Tokens;

#[derive(Clone)]
pub(crate) struct UserController {
    users: Arc<dyn UserRepository>,
    tokens: Arc<Tokens>,
    hash_cost: u32,
}

impl std::fmt::Debug for UserController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserController")
            .field("hash_cost", &self.hash_cost)
            .finish()
    }
}

impl UserController {
    pub(crate) fn new(users: Arc<dyn UserRepository>, tokens: Arc<Tokens>, hash_cost: u32) -> Self {
        Self {
            users,
            tokens,
            hash_cost,
        }
    }

    pub(crate) async fn register(
        &self,
        credentials: Credentials,
    ) -> Result<Envelope<response::User>, Error> {
        if self
            .users
            .find_by_username(&credentials.username)
            .await?
            .is_some()
        {
            return Err(Error::UsernameTaken);
        }

        let password_hash = bcrypt::hash(&credentials.password, self.hash_cost)?;

        let user = match self
            .users
            .create(NewUser {
                username: credentials.username,
                password_hash,
            })
            .await
        {
            Ok(user) => user,
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                return Err(Error::UsernameTaken);
            }
            Err(e) => return Err(Error::Sql(e)),
        };

        tracing::info!(user_id = %user.id, "user registered");

        Ok(Envelope::created(user.into()))
    }

    /// Unknown usernames and wrong passwords fail identically.
    pub(crate) async fn login(
        &self,
        credentials: Credentials,
    ) -> Result<Envelope<response::Login>, Error> {
        let user = self
            .users
            .find_by_username(&credentials.username)
            .await?
            .ok_or(Error::InvalidCredentials)?;

        if let false = bcrypt::verify(&credentials.password, &user.password_hash)? {
            return Err(Error::InvalidCredentials);
        }

        let token = self.tokens.issue(user.id, &user.username)?;

        Ok(Envelope::ok(response::Login {
            id: user.id,
            username: user.username,
            token,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use chrono::Duration;

    use crate::core::config::SigningKey;
    use crate::store::memory::Memory;
    use crate::types::record::User;
    use crate::types::response::Message;

    fn credentials(username: &str, password: &str) -> Credentials {
        Credentials {
            username: username.into(),
            password: password.into(),
        }
    }

    fn controller(users: Arc<dyn UserRepository>) -> (UserController, Arc<Tokens>) {
        let tokens = Arc::new(Tokens::new(&SigningKey::generate(), Duration::minutes(5)));
        (UserController::new(users, tokens.clone(), 4), tokens)
    }

    #[tokio::test]
    async fn register_returns_sanitized_user() {
        let (controller, _) = controller(Arc::new(Memory::<User>::new()));

        let envelope = controller
            .register(credentials("ada", "lovelace"))
            .await
            .unwrap();

        assert_eq!(envelope.status(), StatusCode::CREATED);
        assert_eq!(envelope.message(), Message::Created);
        assert_eq!(envelope.data().username, "ada");

        let body = serde_json::to_value(&envelope).unwrap();
        assert!(body["data"].get("password").is_none());
        assert!(body["data"].get("password_hash").is_none());
    }

    #[tokio::test]
    async fn register_rejects_case_insensitive_duplicate() {
        let (controller, _) = controller(Arc::new(Memory::<User>::new()));

        controller
            .register(credentials("Ada", "lovelace"))
            .await
            .unwrap();

        let result = controller.register(credentials("aDA", "different")).await;

        assert!(matches!(result, Err(Error::UsernameTaken)));
    }

    #[tokio::test]
    async fn register_propagates_lookup_failure_as_internal() {
        let (controller, _) = controller(Arc::new(Memory::<User>::failing()));

        let error = controller
            .register(credentials("ada", "lovelace"))
            .await
            .unwrap_err();

        assert_eq!(error.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn login_issues_token_for_registered_user() {
        let (controller, tokens) = controller(Arc::new(Memory::<User>::new()));

        let registered = controller
            .register(credentials("ada", "lovelace"))
            .await
            .unwrap()
            .into_data();

        let login = controller
            .login(credentials("ada", "lovelace"))
            .await
            .unwrap()
            .into_data();

        assert_eq!(login.id, registered.id);
        assert_eq!(tokens.verify(&login.token).unwrap().user_id, registered.id);
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_user_are_indistinguishable() {
        let (controller, _) = controller(Arc::new(Memory::<User>::new()));

        controller
            .register(credentials("ada", "lovelace"))
            .await
            .unwrap();

        let wrong_password = controller
            .login(credentials("ada", "babbage"))
            .await
            .unwrap_err();
        let unknown_user = controller
            .login(credentials("charles", "lovelace"))
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, Error::InvalidCredentials));
        assert!(matches!(unknown_user, Error::InvalidCredentials));
        assert_eq!(wrong_password.status(), unknown_user.status());
        assert_eq!(wrong_password.message(), unknown_user.message());
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    }
}
