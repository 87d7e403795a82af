//! Handlers for the `/decks/{deck_id}/cards` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use validator::Validate;

use flashdeck_core::error::CoreError;
use flashdeck_core::types::DbId;
use flashdeck_db::models::card::UpsertCard;
use flashdeck_db::repositories::CardRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::ownership::resolve_owned_deck;
use crate::query::IncludeInactiveParams;
use crate::response::{DataResponse, ListResponse};
use crate::state::AppState;

/// PUT /api/v1/decks/{deck_id}/cards
///
/// Idempotent upsert keyed by the optional `id` in the body. With an `id`
/// the card must already exist under `deck_id` (404 otherwise, which also
/// rejects ids from other decks); without one a new card is inserted.
///
/// Update semantics are deliberately per-field: descriptive fields are
/// full-replace (omitted means cleared), `display_order`/`is_active` fall
/// back to the stored value. See `UpsertCard`.
pub async fn upsert(
    State(state): State<AppState>,
    user: AuthUser,
    Path(deck_id): Path<DbId>,
    Json(input): Json<UpsertCard>,
) -> AppResult<Response> {
    input.validate()?;
    resolve_owned_deck(&state.pool, deck_id, &user).await?;

    match input.id {
        Some(id) => {
            let card = CardRepo::update(&state.pool, id, deck_id, &input)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound {
                    entity: "Card",
                    id,
                }))?;
            Ok(Json(DataResponse { data: card }).into_response())
        }
        None => {
            let card = CardRepo::insert(&state.pool, deck_id, &input).await?;
            Ok((StatusCode::CREATED, Json(DataResponse { data: card })).into_response())
        }
    }
}

/// GET /api/v1/decks/{deck_id}/cards?include_inactive=false
///
/// List the deck's cards. Requires ownership of the deck.
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    Path(deck_id): Path<DbId>,
    Query(params): Query<IncludeInactiveParams>,
) -> AppResult<impl IntoResponse> {
    resolve_owned_deck(&state.pool, deck_id, &user).await?;

    let cards = CardRepo::list_by_deck(&state.pool, deck_id, params.include_inactive).await?;
    Ok(Json(ListResponse::new(cards)))
}
