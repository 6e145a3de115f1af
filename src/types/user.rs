use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The authenticated caller, as recovered from a verified token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Identity {
    pub(crate) user_id: Uuid,
    pub(crate) username: String,
    pub(crate) expires_at: DateTime<Utc>,
}

#[derive(Deserialize, Serialize, Debug)]
pub(crate) struct Claims {
    pub(crate) id: Uuid,
    pub(crate) sub: String,
    pub(crate) exp: usize,
    pub(crate) iat: usize,
}
