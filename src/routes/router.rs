use axum::{
    Router,
    extract::{MatchedPath, Request},
    http::Method,
    middleware,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{self, CorsLayer},
    trace::TraceLayer,
};
use tracing::info_span;

use crate::core::state::AppState;
use crate::routes::{auth, author, book};
use crate::utils;

pub(crate) fn routes(state: AppState) -> Router {
    // everything registered before the route_layer requires a bearer token
    let authorized_routes = Router::new()
        .route("/authors", post(author::create).get(author::get_all))
        .route(
            "/authors/{id}",
            get(author::get).put(author::put).delete(author::delete),
        )
        .route("/books", post(book::create).get(book::get_all))
        .route(
            "/books/{id}",
            get(book::get).put(book::put).delete(book::delete),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            utils::auth::authorize,
        ));

    Router::new()
        .route("/", get(|| async { "Hello, World!" }))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .merge(authorized_routes)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                        let matched_path = request
                            .extensions()
                            .get::<MatchedPath>()
                            .map(MatchedPath::as_str);

                        info_span!(
                            "request",
                            method = ?request.method(),
                            matched_path,
                        )
                    }),
                )
                .layer(
                    CorsLayer::new()
                        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                        .allow_origin(cors::Any),
                ),
        )
}
