//! Route definitions for decks.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::deck;
use crate::state::AppState;

/// Routes mounted at `/decks`.
///
/// ```text
/// GET  /       -> list
/// POST /       -> create
/// PUT  /{id}   -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(deck::list).post(deck::create))
        .route("/{id}", put(deck::update))
}
