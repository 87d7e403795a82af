//! Route definitions, one module per resource.

pub mod card;
pub mod deck;
pub mod health;
pub mod review;
pub mod study_session;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /decks                            GET list, POST create
/// /decks/{id}                       PUT update
/// /decks/{deck_id}/cards            GET list, PUT upsert
/// /decks/{deck_id}/sessions         POST start
/// /sessions/{id}/complete           POST complete
/// /decks/{deck_id}/reviews          POST log
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/decks", deck::router())
        .merge(card::router())
        .merge(study_session::router())
        .merge(review::router())
}
