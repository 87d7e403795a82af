//! Route definitions for study sessions.

use axum::routing::post;
use axum::Router;

use crate::handlers::study_session;
use crate::state::AppState;

/// Study session routes.
///
/// ```text
/// POST /decks/{deck_id}/sessions   -> start
/// POST /sessions/{id}/complete     -> complete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/decks/{deck_id}/sessions", post(study_session::start))
        .route("/sessions/{id}/complete", post(study_session::complete))
}
