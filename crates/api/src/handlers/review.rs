//! Handler for logging spaced-repetition review events.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use flashdeck_core::error::CoreError;
use flashdeck_core::types::DbId;
use flashdeck_db::models::review::CreateReview;
use flashdeck_db::repositories::{CardRepo, ReviewRepo, StudySessionRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::ownership::resolve_owned_deck;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/decks/{deck_id}/reviews
///
/// Append one rating event for a card in the deck. The card must belong to
/// `deck_id` (404 otherwise); a supplied `session_id` must name a session
/// owned by the caller (403 otherwise). Scheduling fields (`due_at`,
/// `interval_days`, `ease_factor`) are stored verbatim -- no next-due-date
/// computation happens here.
pub async fn log(
    State(state): State<AppState>,
    user: AuthUser,
    Path(deck_id): Path<DbId>,
    Json(input): Json<CreateReview>,
) -> AppResult<impl IntoResponse> {
    resolve_owned_deck(&state.pool, deck_id, &user).await?;

    let card = CardRepo::find_by_id(&state.pool, input.card_id)
        .await?
        .filter(|card| card.deck_id == deck_id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Card",
            id: input.card_id,
        }))?;

    if let Some(session_id) = input.session_id {
        let owned = StudySessionRepo::find_by_id(&state.pool, session_id)
            .await?
            .is_some_and(|s| s.user_id.as_deref() == Some(user.user_id.as_str()));
        if !owned {
            return Err(AppError::Core(CoreError::Forbidden(
                "Session does not belong to the caller".into(),
            )));
        }
    }

    let review = ReviewRepo::create(&state.pool, card.deck_id, &user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: review })))
}
