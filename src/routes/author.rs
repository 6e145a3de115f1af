use axum::extract::{Path, State};
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::request::AuthorParams;
use crate::types::response::{self, Envelope};
use crate::utils::auth::Caller;
use crate::utils::ownership::{ensure_owner, parse_id};
use crate::utils::validate::Valid;

const INVALID_ID: &str = "Invalid author ID format";
const UPDATE_DENIED: &str = "You do not have permission to update this author";
const DELETE_DENIED: &str = "You do not have permission to delete this author";

#[instrument(skip(state, caller, params))]
pub(crate) async fn create(
    State(state): State<AppState>,
    caller: Caller,
    Valid(params): Valid<AuthorParams>,
) -> Result<Envelope<response::Author>, Error> {
    let identity = caller.require()?;

    state.author_controller.create(identity, params).await
}

#[instrument(skip(state))]
pub(crate) async fn get_all(
    State(state): State<AppState>,
) -> Result<Envelope<Vec<response::Author>>, Error> {
    state.author_controller.list().await
}

#[instrument(skip(state))]
pub(crate) async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Envelope<response::Author>, Error> {
    let id = parse_id(&id, INVALID_ID)?;

    state.author_controller.get(id).await
}

#[instrument(skip(state, caller, params))]
pub(crate) async fn put(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<String>,
    params: Result<Valid<AuthorParams>, Error>,
) -> Result<Envelope<response::Author>, Error> {
    let id = parse_id(&id, INVALID_ID)?;
    let Valid(params) = params?;

    ensure_owner(
        caller.identity(),
        state.author_controller.get(id),
        UPDATE_DENIED,
    )
    .await?;

    state.author_controller.update(id, params).await
}

#[instrument(skip(state, caller))]
pub(crate) async fn delete(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<String>,
) -> Result<Envelope<response::Deleted>, Error> {
    let id = parse_id(&id, INVALID_ID)?;

    ensure_owner(
        caller.identity(),
        state.author_controller.get(id),
        DELETE_DENIED,
    )
    .await?;

    state.author_controller.delete(id).await
}
