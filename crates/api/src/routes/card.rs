//! Route definitions for cards (always scoped to their parent deck).

use axum::routing::put;
use axum::Router;

use crate::handlers::card;
use crate::state::AppState;

/// Card routes.
///
/// ```text
/// PUT /decks/{deck_id}/cards   -> upsert (id in body)
/// GET /decks/{deck_id}/cards   -> list
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/decks/{deck_id}/cards", put(card::upsert).get(card::list))
}
