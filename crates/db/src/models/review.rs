//! Review entity model and DTOs.
//!
//! Reviews are append-only rating events. Scheduling fields (`due_at`,
//! `interval_days`, `ease_factor`) are stored verbatim from the caller;
//! no spaced-repetition computation happens in this service.

use flashdeck_core::types::{DbId, Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Recall-quality rating for a single card review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "review_rating", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Again,
    Hard,
    Good,
    Easy,
}

/// A row from the `reviews` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub deck_id: DbId,
    pub card_id: DbId,
    pub user_id: Option<UserId>,
    pub session_id: Option<DbId>,
    pub rating: Rating,
    pub reviewed_at: Timestamp,
    pub due_at: Option<Timestamp>,
    pub interval_days: i32,
    pub ease_factor: Option<f64>,
    pub created_at: Timestamp,
}

/// DTO for logging a review. `rating` defaults to `good`, `reviewed_at` to
/// now, and `interval_days` to 0 when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReview {
    pub card_id: DbId,
    pub session_id: Option<DbId>,
    pub rating: Option<Rating>,
    pub reviewed_at: Option<Timestamp>,
    pub due_at: Option<Timestamp>,
    pub interval_days: Option<i32>,
    pub ease_factor: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_serde_uses_lowercase_labels() {
        assert_eq!(serde_json::to_string(&Rating::Again).unwrap(), "\"again\"");
        let parsed: Rating = serde_json::from_str("\"easy\"").unwrap();
        assert_eq!(parsed, Rating::Easy);
    }
}
