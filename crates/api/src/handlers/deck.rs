//! Handlers for the `/decks` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use flashdeck_core::error::CoreError;
use flashdeck_core::types::DbId;
use flashdeck_db::models::deck::{CreateDeck, UpdateDeck};
use flashdeck_db::repositories::DeckRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::ownership::resolve_owned_deck;
use crate::query::IncludeInactiveParams;
use crate::response::{DataResponse, ListResponse};
use crate::state::AppState;

/// POST /api/v1/decks
///
/// Create a deck owned by the caller. Unsupplied optional fields take their
/// documented defaults (languages "en", level mixed, active).
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateDeck>,
) -> AppResult<impl IntoResponse> {
    input.validate()?;
    let deck = DeckRepo::create(&state.pool, &user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: deck })))
}

/// PUT /api/v1/decks/{id}
///
/// Partial update: omitted fields keep their stored value, `updated_at` is
/// always refreshed. Requires at least one field in the body and ownership
/// of the deck.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDeck>,
) -> AppResult<impl IntoResponse> {
    if input.is_empty() {
        return Err(AppError::Core(CoreError::InvalidArgument(
            "at least one field must be provided".into(),
        )));
    }
    input.validate()?;

    resolve_owned_deck(&state.pool, id, &user).await?;

    let deck = DeckRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Deck",
            id,
        }))?;
    Ok(Json(DataResponse { data: deck }))
}

/// GET /api/v1/decks?include_inactive=false
///
/// List the caller's decks. Inactive decks are filtered out unless
/// `include_inactive` is set.
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<IncludeInactiveParams>,
) -> AppResult<impl IntoResponse> {
    let decks =
        DeckRepo::list_by_owner(&state.pool, &user.user_id, params.include_inactive).await?;
    Ok(Json(ListResponse::new(decks)))
}
