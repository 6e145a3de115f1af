use std::sync::Arc;

use sqlx::postgres::PgPool;

use crate::controllers::author::AuthorController;
use crate::controllers::book::BookController;
use crate::controllers::user::UserController;
use crate::store::postgres::{PgAuthors, PgBooks, PgUsers};
use crate::store::{AuthorRepository, BookRepository, UserRepository};
use crate::utils::token::Tokens;

#[derive(Clone, Debug)]
pub(crate) struct AppState {
    pub(crate) tokens: Arc<Tokens>,
    pub(crate) user_controller: UserController,
    pub(crate) author_controller: AuthorController,
    pub(crate) book_controller: BookController,
}

impl AppState {
    pub(crate) fn new(pool: PgPool, tokens: Tokens, hash_cost: u32) -> Self {
        Self::with_repositories(
            Arc::new(PgUsers::new(pool.clone())),
            Arc::new(PgAuthors::new(pool.clone())),
            Arc::new(PgBooks::new(pool)),
            tokens,
            hash_cost,
        )
    }

    pub(crate) fn with_repositories(
        users: Arc<dyn UserRepository>,
        authors: Arc<dyn AuthorRepository>,
        books: Arc<dyn BookRepository>,
        tokens: Tokens,
        hash_cost: u32,
    ) -> Self {
        let tokens = Arc::new(tokens);

        AppState {
            user_controller: UserController::new(users, tokens.clone(), hash_cost),
            author_controller: AuthorController::new(authors),
            book_controller: BookController::new(books),
            tokens,
        }
    }
}
