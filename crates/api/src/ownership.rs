//! Deck ownership resolution.
//!
//! Every operation scoped to a deck re-derives authorization by loading the
//! deck and comparing its owner against the caller. The check and the
//! subsequent write are separate store calls with no wrapping transaction;
//! a concurrent ownership change between them is an accepted race at this
//! scale.

use sqlx::PgPool;

use flashdeck_core::error::CoreError;
use flashdeck_core::types::DbId;
use flashdeck_db::models::deck::Deck;
use flashdeck_db::repositories::DeckRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;

/// Load the deck with `deck_id` and verify `user` owns it.
///
/// Fails with `NOT_FOUND` if no such deck exists and with `FORBIDDEN` if it
/// belongs to a different owner. Read-only; must be called before any
/// mutation or listing scoped to a deck.
pub async fn resolve_owned_deck(
    pool: &PgPool,
    deck_id: DbId,
    user: &AuthUser,
) -> AppResult<Deck> {
    let deck = DeckRepo::find_by_id(pool, deck_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Deck",
            id: deck_id,
        }))?;

    if deck.owner_id != user.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Deck does not belong to the caller".into(),
        )));
    }

    Ok(deck)
}
