//! Repository for the `reviews` table.

use sqlx::PgPool;

use flashdeck_core::types::DbId;

use crate::models::review::{CreateReview, Review};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, deck_id, card_id, user_id, session_id, rating, \
                        reviewed_at, due_at, interval_days, ease_factor, created_at";

/// Provides insert-only access to reviews. Rows are append-only: never
/// updated or deleted after insertion.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a review row, returning it.
    ///
    /// Scheduling fields are stored verbatim; defaults (`rating` good,
    /// `reviewed_at` now, `interval_days` 0) are applied in SQL.
    pub async fn create(
        pool: &PgPool,
        deck_id: DbId,
        user_id: &str,
        input: &CreateReview,
    ) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (deck_id, card_id, user_id, session_id, rating, \
                                  reviewed_at, due_at, interval_days, ease_factor) \
             VALUES ($1, $2, $3, $4, COALESCE($5, 'good'::review_rating), \
                     COALESCE($6, NOW()), $7, COALESCE($8, 0), $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(deck_id)
            .bind(input.card_id)
            .bind(user_id)
            .bind(input.session_id)
            .bind(input.rating)
            .bind(input.reviewed_at)
            .bind(input.due_at)
            .bind(input.interval_days)
            .bind(input.ease_factor)
            .fetch_one(pool)
            .await
    }

    /// List reviews for a card, newest first.
    pub async fn list_by_card(pool: &PgPool, card_id: DbId) -> Result<Vec<Review>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM reviews WHERE card_id = $1 ORDER BY reviewed_at DESC");
        sqlx::query_as::<_, Review>(&query)
            .bind(card_id)
            .fetch_all(pool)
            .await
    }
}
