//! Route definitions for review logging.

use axum::routing::post;
use axum::Router;

use crate::handlers::review;
use crate::state::AppState;

/// Review routes.
///
/// ```text
/// POST /decks/{deck_id}/reviews   -> log
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/decks/{deck_id}/reviews", post(review::log))
}
