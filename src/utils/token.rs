use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::core::config::SigningKey;
use crate::core::error::{AuthError, Error};
use crate::types::user::{Claims, Identity};

/// Issues and verifies HS256 tokens binding a caller to their user id.
#[derive(Clone)]
pub(crate) struct Tokens {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl std::fmt::Debug for Tokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokens").field("ttl", &self.ttl).finish()
    }
}

impl Tokens {
    pub(crate) fn new(key: &SigningKey, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(key.as_bytes()),
            decoding_key: DecodingKey::from_secret(key.as_bytes()),
            validation,
            ttl,
        }
    }

    pub(crate) fn issue(&self, user_id: Uuid, username: &str) -> Result<String, Error> {
        self.issue_at(Utc::now(), user_id, username)
    }

    fn issue_at(
        &self,
        current_time: DateTime<Utc>,
        user_id: Uuid,
        username: &str,
    ) -> Result<String, Error> {
        let expiration_time = current_time + self.ttl;

        let claims = Claims {
            id: user_id,
            sub: username.to_owned(),
            exp: expiration_time.timestamp() as usize,
            iat: current_time.timestamp() as usize,
        };

        Ok(jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding_key,
        )?)
    }

    pub(crate) fn verify(&self, token: &str) -> Result<Identity, AuthError> {
        let token_data =
            match jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &self.validation) {
                Ok(token_data) => token_data,
                Err(e) => match e.kind() {
                    ErrorKind::ExpiredSignature => return Err(AuthError::ExpiredToken),
                    _ => return Err(AuthError::InvalidToken),
                },
            };

        let expires_at = Utc
            .timestamp_opt(token_data.claims.exp as i64, 0)
            .single()
            .ok_or(AuthError::InvalidToken)?;

        Ok(Identity {
            user_id: token_data.claims.id,
            username: token_data.claims.sub,
            expires_at,
        })
    }
}
