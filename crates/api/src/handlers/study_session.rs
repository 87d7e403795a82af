//! Handlers for study sessions.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use flashdeck_core::error::CoreError;
use flashdeck_core::types::DbId;
use flashdeck_db::models::study_session::CompleteStudySession;
use flashdeck_db::repositories::StudySessionRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::ownership::resolve_owned_deck;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/decks/{deck_id}/sessions
///
/// Start a practice run against the deck: `started_at` now, counters
/// zeroed, `completed_at` null. Requires ownership of the deck.
pub async fn start(
    State(state): State<AppState>,
    user: AuthUser,
    Path(deck_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    resolve_owned_deck(&state.pool, deck_id, &user).await?;

    let session = StudySessionRepo::create(&state.pool, deck_id, &user.user_id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: session })))
}

/// POST /api/v1/sessions/{id}/complete
///
/// Fill in counters/summary/`completed_at` on a session owned by the
/// caller. Omitted counters keep their stored value; an omitted
/// `completed_at` becomes now. A session owned by a different user is
/// reported as 404, not 403: the lookup is scoped to the caller's user id.
pub async fn complete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<CompleteStudySession>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;

    let session = StudySessionRepo::complete(&state.pool, id, &user.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "StudySession",
            id,
        }))?;
    Ok(Json(DataResponse { data: session }))
}
