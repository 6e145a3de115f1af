use axum::extract::{Path, State};
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::request::BookParams;
use crate::types::response::{self, Envelope};
use crate::utils::auth::Caller;
use crate::utils::ownership::{ensure_owner, parse_id};
use crate::utils::validate::Valid;

const INVALID_ID: &str = "Invalid book ID format";
const UPDATE_DENIED: &str = "You do not have permission to update this book";
const DELETE_DENIED: &str = "You do not have permission to delete this book";

#[instrument(skip(state, caller, params))]
pub(crate) async fn create(
    State(state): State<AppState>,
    caller: Caller,
    Valid(params): Valid<BookParams>,
) -> Result<Envelope<response::Book>, Error> {
    let identity = caller.require()?;

    state.book_controller.create(identity, params).await
}

#[instrument(skip(state))]
pub(crate) async fn get_all(
    State(state): State<AppState>,
) -> Result<Envelope<Vec<response::Book>>, Error> {
    state.book_controller.list().await
}

#[instrument(skip(state))]
pub(crate) async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Envelope<response::Book>, Error> {
    let id = parse_id(&id, INVALID_ID)?;

    state.book_controller.get(id).await
}

#[instrument(skip(state, caller, params))]
pub(crate) async fn put(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<String>,
    params: Result<Valid<BookParams>, Error>,
) -> Result<Envelope<response::Book>, Error> {
    let id = parse_id(&id, INVALID_ID)?;
    let Valid(params) = params?;

    ensure_owner(
        caller.identity(),
        state.book_controller.get(id),
        UPDATE_DENIED,
    )
    .await?;

    state.book_controller.update(id, params).await
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
        state.book_controller.get(id),
        DELETE_DENIED,
    )
    .await?;

    state.book_controller.delete(id).await
}
