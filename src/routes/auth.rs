use axum::extract::State;
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::request::Credentials;
use crate::types::response::{self, Envelope};
use crate::utils::validate::Valid;

#[instrument(skip(state, credentials))]
pub(crate) async fn register(
    State(state): State<AppState>,
    Valid(credentials): Valid<Credentials>,
) -> Result<Envelope<response::User>, Error> {
    state.user_controller.register(credentials).await
}

#[instrument(skip(state, credentials))]
pub(crate) async fn login(
    State(state): State<AppState>,
    Valid(credentials): Valid<Credentials>,
) -> Result<Envelope<response::Login>, Error> {
    state.user_controller.login(credentials).await
}
